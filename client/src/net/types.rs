//! Wire DTOs for the blog backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON verbatim (`_id`, `isVerified`,
//! `publushedat`, ...) through serde renames so responses decode without a
//! translation layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Account role. Unknown strings are kept so newer backend roles do not break
/// decoding of the whole user record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    User,
    SuperAdmin,
    Other(String),
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::SuperAdmin => "super-admin",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

impl From<&str> for UserRole {
    fn from(raw: &str) -> Self {
        match raw {
            "admin" => Self::Admin,
            "user" => Self::User,
            "super-admin" => Self::SuperAdmin,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// A user record as returned by `GET /users/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    pub username: String,
    pub role: UserRole,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,
}

/// A submitted post waiting in the moderation queue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub topicid: Option<String>,
    #[serde(default)]
    pub approvedby: Option<String>,
    #[serde(rename = "publushedat", default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub createdat: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub createdby: Option<String>,
    #[serde(default)]
    pub viewcount: u64,
}

/// An approved post joined with its topic and domain for the public listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApprovedBlog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub topicid: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub viewcount: u64,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub createdat: Option<String>,
}

/// `POST /auth/login` and `/auth/oauth-login` success body.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Generic `{ "message": ... }` body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /users/verify-email` success body.
#[derive(Clone, Debug, Deserialize)]
pub struct VerifyEmailResponse {
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
}

/// Credentials for `POST /auth/login`. `remember_me` selects the storage area
/// and never leaves the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(skip)]
    pub remember_me: bool,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}
