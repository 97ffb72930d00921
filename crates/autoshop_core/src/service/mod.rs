//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level gateway APIs.
//! - Keep presentation adapters decoupled from storage details.

pub mod appointment_service;
