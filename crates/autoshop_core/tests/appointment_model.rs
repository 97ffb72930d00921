use autoshop_core::{Appointment, AppointmentFields, AppointmentValidationError};
use uuid::Uuid;

fn sample_fields() -> AppointmentFields {
    AppointmentFields::new(
        "A1",
        "Jane",
        "555-1111",
        "Oil Change",
        "2024-05-01",
        "09:00",
    )
}

#[test]
fn new_sets_all_six_fields() {
    let fields = sample_fields();

    assert_eq!(fields.appointment_id, "A1");
    assert_eq!(fields.customer_name, "Jane");
    assert_eq!(fields.phone, "555-1111");
    assert_eq!(fields.service_type, "Oil Change");
    assert_eq!(fields.date, "2024-05-01");
    assert_eq!(fields.time, "09:00");
    assert!(fields.validate().is_ok());
}

#[test]
fn validate_reports_first_empty_field_in_declaration_order() {
    let mut fields = sample_fields();
    fields.customer_name = String::new();
    fields.time = String::new();

    let err = fields.validate().unwrap_err();
    assert_eq!(err, AppointmentValidationError::EmptyField("customer_name"));
}

#[test]
fn validate_treats_whitespace_only_as_empty() {
    let mut fields = sample_fields();
    fields.phone = "   ".to_string();

    let err = fields.validate().unwrap_err();
    assert_eq!(err, AppointmentValidationError::EmptyField("phone"));
    assert_eq!(err.to_string(), "required field `phone` is empty");
}

#[test]
fn validate_checks_every_required_field() {
    for (name, _) in sample_fields().named_values() {
        let mut fields = sample_fields();
        match name {
            "appointment_id" => fields.appointment_id = String::new(),
            "customer_name" => fields.customer_name = String::new(),
            "phone" => fields.phone = String::new(),
            "service_type" => fields.service_type = String::new(),
            "date" => fields.date = String::new(),
            "time" => fields.time = String::new(),
            other => panic!("unexpected field name: {other}"),
        }

        let err = fields.validate().unwrap_err();
        assert_eq!(err, AppointmentValidationError::EmptyField(name));
    }
}

#[test]
fn appointment_serialization_uses_flat_wire_fields() {
    let record_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let appointment = Appointment::new(record_id, sample_fields());

    let json = serde_json::to_value(&appointment).unwrap();
    assert_eq!(json["record_id"], record_id.to_string());
    assert_eq!(json["appointment_id"], "A1");
    assert_eq!(json["customer_name"], "Jane");
    assert_eq!(json["phone"], "555-1111");
    assert_eq!(json["service_type"], "Oil Change");
    assert_eq!(json["date"], "2024-05-01");
    assert_eq!(json["time"], "09:00");

    let decoded: Appointment = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, appointment);
}
