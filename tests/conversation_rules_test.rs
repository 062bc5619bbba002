//! Tests for the interactive message content rules: length limits and the
//! external-contact filter that keeps negotiation on-platform.
//!
//! Run with: `cargo test --test conversation_rules_test`

use taqyeem_backend::handlers::conversations::{detect_external_contact, validate_message_content};

#[test]
fn test_ordinary_messages_pass() {
    assert!(validate_message_content("متى يمكن زيارة العقار؟").is_ok());
    assert!(validate_message_content("The deed is attached to the request.").is_ok());
}

#[test]
fn test_empty_messages_are_rejected() {
    assert!(validate_message_content("").is_err());
    assert!(validate_message_content("   \n ").is_err());
}

#[test]
fn test_overlong_messages_are_rejected() {
    let long = "م".repeat(3001);
    assert!(validate_message_content(&long).is_err());

    let exactly_max = "a".repeat(3000);
    assert!(validate_message_content(&exactly_max).is_ok());
}

#[test]
fn test_email_addresses_are_flagged() {
    assert!(detect_external_contact("راسلني على someone@example.com"));
}

#[test]
fn test_urls_are_flagged() {
    assert!(detect_external_contact("see https://example.com/listing"));
    assert!(detect_external_contact("www.example.com"));
}

#[test]
fn test_phone_numbers_are_flagged() {
    assert!(detect_external_contact("call me +968 9123 4567"));
    assert!(detect_external_contact("0501234567"));
}

#[test]
fn test_messenger_handles_are_flagged() {
    assert!(detect_external_contact("whatsapp me"));
    assert!(detect_external_contact("wa.me/96891234567"));
    assert!(detect_external_contact("send an SMS instead"));
}

#[test]
fn test_plain_numbers_are_not_phone_numbers() {
    // Short figures (areas, amounts) must not trip the phone pattern.
    assert!(!detect_external_contact("العرض 95000 ريال"));
    assert!(!detect_external_contact("المساحة 400 متر"));
}
