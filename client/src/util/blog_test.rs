use super::*;

fn approved(id: &str, domain: &str) -> ApprovedBlog {
    serde_json::from_value(serde_json::json!({ "_id": id, "title": id, "domain": domain })).unwrap()
}

#[test]
fn preview_keeps_first_sentence() {
    assert_eq!(content_preview("Rust is fast. It is also safe."), "Rust is fast...");
}

#[test]
fn preview_without_period_uses_whole_text() {
    assert_eq!(content_preview("No period here"), "No period here...");
    assert_eq!(content_preview(""), "...");
}

#[test]
fn preview_caps_long_sentences_at_char_boundary() {
    let long = "é".repeat(150);
    let preview = content_preview(&long);
    assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
    assert!(preview.ends_with("..."));
}

#[test]
fn unique_domains_dedupes_case_insensitively_and_sorts() {
    let blogs = vec![
        approved("1", "Tech"),
        approved("2", "health"),
        approved("3", "tech"),
        approved("4", ""),
        approved("5", "Arts"),
    ];
    assert_eq!(unique_domains(&blogs), vec!["Arts", "health", "Tech"]);
}

