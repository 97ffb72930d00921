//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `autoshop_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the desktop shell.
    println!("autoshop_core ping={}", autoshop_core::ping());
    println!("autoshop_core version={}", autoshop_core::core_version());
}
