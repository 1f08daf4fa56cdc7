//! Presentation helpers for blog listings.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use crate::net::types::ApprovedBlog;

/// Longest preview kept before the ellipsis.
pub const PREVIEW_CHARS: usize = 100;

/// First sentence of `content`, cut to [`PREVIEW_CHARS`], always followed by
/// `...`.
pub fn content_preview(content: &str) -> String {
    let sentence = content.split('.').next().unwrap_or_default().trim();
    let mut preview: String = sentence.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Distinct non-empty domains, compared case-insensitively with the first
/// spelling kept, sorted case-insensitively.
pub fn unique_domains(blogs: &[ApprovedBlog]) -> Vec<String> {
    let mut seen: Vec<(String, String)> = Vec::new();
    for blog in blogs {
        let domain = blog.domain.trim();
        if domain.is_empty() {
            continue;
        }
        let key = domain.to_lowercase();
        if !seen.iter().any(|(existing, _)| *existing == key) {
            seen.push((key, domain.to_owned()));
        }
    }
    seen.sort_by(|a, b| a.0.cmp(&b.0));
    seen.into_iter().map(|(_, domain)| domain).collect()
}

