use super::*;

#[test]
fn user_decodes_backend_field_names() {
    let user: User = serde_json::from_str(
        r#"{
            "_id": "64f0",
            "email": "ada@example.com",
            "username": "ada",
            "role": "admin",
            "isVerified": true,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z",
            "avatar": "https://cdn/a.png"
        }"#,
    )
    .unwrap();
    assert_eq!(user.id, "64f0");
    assert_eq!(user.role, UserRole::Admin);
    assert!(user.is_verified);
    assert_eq!(user.avatar.as_deref(), Some("https://cdn/a.png"));
    assert_eq!(user.profile_picture, None);
}

#[test]
fn user_missing_optional_fields_uses_defaults() {
    let user: User =
        serde_json::from_str(r#"{"_id":"1","email":"e","username":"u","role":"user"}"#).unwrap();
    assert!(!user.is_verified);
    assert_eq!(user.created_at, None);
}

#[test]
fn user_role_round_trips_known_and_unknown_values() {
    for raw in ["admin", "user", "super-admin", "editor"] {
        let role: UserRole = serde_json::from_value(serde_json::json!(raw)).unwrap();
        assert_eq!(role.as_str(), raw);
        assert_eq!(serde_json::to_value(&role).unwrap(), serde_json::json!(raw));
    }
    assert_eq!(UserRole::from("editor"), UserRole::Other("editor".to_owned()));
}

#[test]
fn user_role_admin_check() {
    assert!(UserRole::Admin.is_admin());
    assert!(UserRole::SuperAdmin.is_admin());
    assert!(!UserRole::User.is_admin());
    assert!(!UserRole::Other("admin ".to_owned()).is_admin());
}

#[test]
fn login_request_omits_remember_me() {
    let body = LoginRequest { email: "a@b.c".to_owned(), password: "pw".to_owned(), remember_me: true };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "email": "a@b.c", "password": "pw" })
    );
}

#[test]
fn blog_decodes_moderation_entry() {
    let blog: Blog = serde_json::from_str(
        r#"{"_id":"b1","title":"Hello","content":"Body.","topicid":"t1","status":"pending",
            "createdby":"u1","viewcount":3,"publushedat":null,"createdat":"2024-02-02"}"#,
    )
    .unwrap();
    assert_eq!(blog.id, "b1");
    assert_eq!(blog.status, "pending");
    assert_eq!(blog.viewcount, 3);
    assert_eq!(blog.published_at, None);
}

#[test]
fn approved_blog_decodes_domain_and_topic() {
    let blog: ApprovedBlog = serde_json::from_str(
        r#"{"_id":"b2","title":"T","content":"C","status":"approved","domain":"Tech","topic":"Rust"}"#,
    )
    .unwrap();
    assert_eq!(blog.domain, "Tech");
    assert_eq!(blog.topic, "Rust");
    assert_eq!(blog.viewcount, 0);
}

#[test]
fn message_response_tolerates_missing_message() {
    let body: MessageResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}
