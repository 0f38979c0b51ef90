use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_from_reqres_shape() {
    let json = r#"{
        "id": 7,
        "email": "michael.lawson@reqres.in",
        "first_name": "Michael",
        "last_name": "Lawson",
        "avatar": "https://reqres.in/img/faces/7-image.jpg"
    }"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.first_name, "Michael");
    assert_eq!(user.avatar, "https://reqres.in/img/faces/7-image.jpg");
}

#[test]
fn user_without_avatar_defaults_to_empty() {
    let json = r#"{"id": 1, "email": "a@b.c", "first_name": "A", "last_name": "B"}"#;
    let user: User = serde_json::from_str(json).unwrap();
    assert!(user.avatar.is_empty());
}

#[test]
fn full_name_joins_first_and_last() {
    let user = User {
        id: 2,
        email: "janet.weaver@reqres.in".to_owned(),
        first_name: "Janet".to_owned(),
        last_name: "Weaver".to_owned(),
        avatar: String::new(),
    };
    assert_eq!(user.full_name(), "Janet Weaver");
}

// =============================================================
// UserPage
// =============================================================

#[test]
fn user_page_decodes_pagination_fields() {
    let json = r#"{
        "page": 2,
        "per_page": 6,
        "total": 12,
        "total_pages": 2,
        "data": [
            {"id": 7, "email": "m@reqres.in", "first_name": "Michael", "last_name": "Lawson", "avatar": ""}
        ],
        "support": {"url": "https://reqres.in"}
    }"#;
    let page: UserPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.page, 2);
    assert_eq!(page.per_page, 6);
    assert_eq!(page.total, 12);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.data.len(), 1);
}

#[test]
fn user_page_accepts_integral_floats() {
    let json = r#"{"page": 1.0, "total_pages": 3.0, "data": []}"#;
    let page: UserPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.per_page, 0);
}

#[test]
fn user_page_rejects_fractional_page() {
    let json = r#"{"page": 1.5, "total_pages": 3, "data": []}"#;
    assert!(serde_json::from_str::<UserPage>(json).is_err());
}

#[test]
fn user_page_rejects_negative_total_pages() {
    let json = r#"{"page": 1, "total_pages": -1, "data": []}"#;
    assert!(serde_json::from_str::<UserPage>(json).is_err());
}

#[test]
fn user_page_rejects_string_page() {
    let json = r#"{"page": "1", "total_pages": 1, "data": []}"#;
    assert!(serde_json::from_str::<UserPage>(json).is_err());
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_response_reads_token() {
    let resp: LoginResponse = serde_json::from_str(r#"{"token":"QpwL5tke4Pnpja7X4"}"#).unwrap();
    assert_eq!(resp.token, "QpwL5tke4Pnpja7X4");
}

#[test]
fn credentials_serialize_as_email_and_password() {
    let creds = Credentials { email: "eve.holt@reqres.in".to_owned(), password: "cityslicka".to_owned() };
    let json = serde_json::to_value(&creds).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "eve.holt@reqres.in", "password": "cityslicka" }));
}
