use super::*;

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_parses_known_strings() {
    assert_eq!(
        serde_json::from_str::<Role>("\"customer\"").unwrap(),
        Role::Customer
    );
    assert_eq!(
        serde_json::from_str::<Role>("\"professional\"").unwrap(),
        Role::Professional
    );
    assert_eq!(
        serde_json::from_str::<Role>("\"admin\"").unwrap(),
        Role::Admin
    );
}

#[test]
fn role_unknown_string_degrades_to_customer() {
    assert_eq!(
        serde_json::from_str::<Role>("\"superuser\"").unwrap(),
        Role::Customer
    );
}

#[test]
fn role_default_is_customer() {
    assert_eq!(Role::default(), Role::Customer);
}

// =============================================================
// Session envelope
// =============================================================

#[test]
fn session_envelope_null_user_is_absent() {
    let envelope: SessionEnvelope = serde_json::from_str(r#"{"user":null}"#).unwrap();
    assert!(envelope.user.is_none());
}

#[test]
fn session_envelope_parses_full_user() {
    let body = r#"{
        "user": {
            "id": 7,
            "username": "asha",
            "email": "asha@example.com",
            "role": "admin",
            "image_file": "asha.png",
            "is_blocked": false
        }
    }"#;
    let envelope: SessionEnvelope = serde_json::from_str(body).unwrap();
    let user = envelope.user.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Admin);
    assert!(!user.is_blocked);
}

#[test]
fn user_optional_fields_default() {
    let body = r#"{"id":1,"username":"n","email":"n@example.com"}"#;
    let user: User = serde_json::from_str(body).unwrap();
    assert_eq!(user.role, Role::Customer);
    assert_eq!(user.image_file, "");
    assert!(!user.is_blocked);
}

// =============================================================
// Derived display helpers
// =============================================================

#[test]
fn image_url_uses_uploaded_file() {
    let user = User {
        id: 1,
        username: "n".to_owned(),
        email: "n@example.com".to_owned(),
        role: Role::Customer,
        image_file: "me.jpg".to_owned(),
        is_blocked: false,
    };
    assert_eq!(user.image_url(), "/profile_pictures/me.jpg");
}

#[test]
fn image_url_falls_back_to_stock_picture() {
    let user = User {
        id: 1,
        username: "n".to_owned(),
        email: "n@example.com".to_owned(),
        role: Role::Customer,
        image_file: String::new(),
        is_blocked: false,
    };
    assert_eq!(user.image_url(), "/profile_pictures/profile.png");
}

#[test]
fn payment_method_labels() {
    let card = PaymentMethod {
        id: 1,
        method_type: "credit_card".to_owned(),
        card_last_four: Some("4242".to_owned()),
        upi_id: None,
        bank_name: None,
        is_default: true,
    };
    assert_eq!(card.label(), "Card ending 4242");

    let upi = PaymentMethod {
        id: 2,
        method_type: "upi".to_owned(),
        card_last_four: None,
        upi_id: Some("asha@upi".to_owned()),
        bank_name: None,
        is_default: false,
    };
    assert_eq!(upi.label(), "asha@upi");
}

#[test]
fn cart_item_quantity_defaults_to_one() {
    let body = r#"{"id":1,"service_id":2,"name":"Plumbing","base_price":499.0}"#;
    let item: CartItem = serde_json::from_str(body).unwrap();
    assert_eq!(item.quantity, 1);
}
