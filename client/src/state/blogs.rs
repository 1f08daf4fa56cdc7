//! Blog listing and moderation-queue state.
//!
//! DESIGN
//! ======
//! Public listings and the admin queue live in one store because both pages
//! share the same loading/error surface. Mutations that only trigger backend
//! work (`add_topic`, `add_blog`) report through notices and leave the lists
//! alone.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use std::sync::Arc;

use serde::de::IgnoredAny;
use serde_json::json;

use super::notices::Notices;
use super::store::Store;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{ApprovedBlog, Blog};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlogState {
    /// Moderation queue, admin only.
    pub pending: Vec<Blog>,
    pub approved: Vec<ApprovedBlog>,
    pub current: Option<Blog>,
    pub loading: bool,
    /// Last failure message; empty when clear.
    pub error: String,
}

/// Moderation verdict for a pending post.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Approve,
    Reject,
}

impl Verdict {
    fn path(self) -> &'static str {
        match self {
            Self::Approve => "/blogs/admin/pending-blogs/approve",
            Self::Reject => "/blogs/admin/pending-blogs/reject",
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            Self::Approve => "Blog approved successfully",
            Self::Reject => "Blog rejected successfully",
        }
    }
}

pub struct BlogStore {
    state: Store<BlogState>,
    api: Arc<ApiClient>,
    notices: Notices,
}

impl BlogStore {
    pub fn new(api: Arc<ApiClient>, notices: Notices) -> Self {
        Self { state: Store::new(BlogState::default()), api, notices }
    }

    pub fn state(&self) -> &Store<BlogState> {
        &self.state
    }

    pub async fn fetch_pending_blogs(&self) {
        self.begin();
        match self.api.get::<Vec<Blog>>("/blogs/admin/pending-blogs").await {
            Ok(pending) => self.state.update(|s| {
                s.pending = pending;
                s.loading = false;
            }),
            Err(err) => self.fail(&err),
        }
    }

    pub async fn fetch_approved_with_domains(&self) {
        self.begin();
        match self.api.get::<Vec<ApprovedBlog>>("/blogs/approved/with-domains").await {
            Ok(approved) => self.state.update(|s| {
                s.approved = approved;
                s.loading = false;
            }),
            Err(err) => self.fail(&err),
        }
    }

    pub async fn fetch_blog(&self, id: &str) {
        self.begin();
        self.state.update(|s| s.current = None);
        match self.api.get::<Blog>(&format!("/blogs/{id}")).await {
            Ok(blog) => self.state.update(|s| {
                s.current = Some(blog);
                s.loading = false;
            }),
            Err(err) => self.fail(&err),
        }
    }

    /// `username` is the acting admin, when known.
    pub async fn approve_blog(&self, id: &str, username: Option<&str>) {
        self.moderate(Verdict::Approve, id, username).await;
    }

    pub async fn reject_blog(&self, id: &str, username: Option<&str>) {
        self.moderate(Verdict::Reject, id, username).await;
    }

    async fn moderate(&self, verdict: Verdict, id: &str, username: Option<&str>) {
        log::debug!("moderating blog {id}: {verdict:?}");
        let mut payload = json!({ "blogId": id });
        if let Some(username) = username {
            payload["username"] = json!(username);
        }
        match self.api.post::<_, IgnoredAny>(verdict.path(), &payload).await {
            Ok(_) => {
                self.state.update(|s| s.pending.retain(|blog| blog.id != id));
                self.notices.success(verdict.success_message());
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Ask the backend to create a topic for later generation.
    pub async fn add_topic(&self, topic: &str) {
        let payload = json!({ "topic": topic.trim() });
        match self.api.post::<_, IgnoredAny>("/topics/add-topic", &payload).await {
            Ok(_) => {
                self.notices.success("Topic added successfully");
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Ask the backend to generate a post for `topic_id`.
    pub async fn add_blog(&self, topic_id: &str) {
        let payload = json!({ "topicId": topic_id });
        match self.api.post::<_, IgnoredAny>("/blogs/add-blog", &payload).await {
            Ok(_) => {
                self.notices.success("Blog generation started");
            }
            Err(err) => self.fail(&err),
        }
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error.clear());
    }

    fn begin(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error.clear();
        });
    }

    fn fail(&self, err: &ApiError) {
        log::warn!("blog request failed: {err}");
        self.state.update(|s| {
            s.error = err.message.clone();
            s.loading = false;
        });
        self.notices.error(err.message.clone());
    }
}
