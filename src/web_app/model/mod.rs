// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the browser, the SSR server and the
// upstream media API, so they all speak serde JSON. Field names follow
// the upstream API (camelCase where it uses it).

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Thumbnails used when a media record has no usable picture of its own
pub const DEFAULT_THUMBNAILS: [&str; 3] = [
    "/assets/images/images.jpeg",
    "/assets/images/images1.jpg",
    "/assets/images/images2.jpeg",
];

/// Display name used for comments when nobody is signed in
pub const GUEST_NAME: &str = "Guest";

/// Media category as reported by the upstream API
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Images,
    Videos,
    Movies,
    #[default]
    #[serde(other)]
    Unknown,
}

impl MediaCategory {
    /// Chip colour for the category badge
    pub fn color(&self) -> &'static str {
        match self {
            MediaCategory::Images => "#4CAF50",
            MediaCategory::Videos => "#2196F3",
            MediaCategory::Movies => "#9C27B0",
            MediaCategory::Unknown => "#607D8B",
        }
    }

    /// Videos and movies render through a player, everything else as an image
    pub fn is_playable(&self) -> bool {
        matches!(self, MediaCategory::Videos | MediaCategory::Movies)
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaCategory::Images => write!(f, "images"),
            MediaCategory::Videos => write!(f, "videos"),
            MediaCategory::Movies => write!(f, "movies"),
            MediaCategory::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Media summary as returned by the search/listing endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub category: MediaCategory,
    #[serde(rename = "averageRating", alias = "rating", default)]
    pub average_rating: f64,
    #[serde(default)]
    pub url: Option<String>,
}

/// Full media record for the details page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: MediaCategory,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(alias = "averageRating", default)]
    pub rating: f64,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub upload_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Media {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// First letter of the uploader for the avatar bubble
    pub fn uploader_initial(&self) -> char {
        self.uploader
            .as_deref()
            .and_then(|name| name.chars().next())
            .unwrap_or('U')
    }
}

/// A posted comment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub username: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    /// Comment shown locally before the server has acknowledged it
    pub fn optimistic(username: &str, text: &str, now: DateTime<Utc>) -> Self {
        Self {
            username: username.to_string(),
            text: text.to_string(),
            timestamp: now,
        }
    }
}

/// Comment submission body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub upload_id: i64,
    pub comment: String,
}

impl NewComment {
    /// Returns `None` for blank text, which the UI never submits
    pub fn new(upload_id: i64, comment: &str) -> Option<Self> {
        if comment.trim().is_empty() {
            return None;
        }
        Some(Self {
            upload_id,
            comment: comment.to_string(),
        })
    }
}

/// Star rating submitted for a media record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSubmission {
    pub rating: u8,
}

impl RatingSubmission {
    pub fn new(rating: u8) -> Self {
        Self {
            rating: rating.clamp(1, 5),
        }
    }
}

/// Login / sign-up form payload
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

/// Authenticated user returned by login and sign-up
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub token: Option<String>,
}

/// Explicit session passed to the components that need the current user.
///
/// Provided through context by the root component instead of being read
/// from browser storage wherever it is needed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .unwrap_or(GUEST_NAME)
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// Upstream token of the signed-in user, forwarded on writes
    pub fn token(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| u.token.clone())
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

/// Search tuning the server hands to the browser
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSettings {
    pub debounce_ms: u64,
}

impl SearchSettings {
    pub fn from_debounce(debounce: Duration) -> Self {
        Self {
            debounce_ms: u64::try_from(debounce.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::from_debounce(crate::web_app::search::DEFAULT_DEBOUNCE)
    }
}

/// Navigation entry shared by the header and the admin drawer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const SITE_MENU: [NavItem; 2] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Categories", path: "/medias" },
];

pub const ADMIN_MENU: [NavItem; 3] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Dashboard", path: "/admin" },
    NavItem { label: "Upload Media", path: "/admin/upload" },
];

/// Lit/unlit state of the five rating stars; star `i` is lit when `i < rating`
pub fn star_states(rating: f64) -> [bool; 5] {
    std::array::from_fn(|i| (i as f64) < rating)
}

/// Thumbnail for a media card.
///
/// Playable media never use their own url (it points at a video file), so
/// they get one of the defaults; `pick` selects which default.
pub fn thumbnail_for(media: &MediaSummary, pick: usize) -> String {
    let fallback = DEFAULT_THUMBNAILS[pick % DEFAULT_THUMBNAILS.len()];
    if media.category.is_playable() {
        return fallback.to_string();
    }
    media
        .url
        .as_deref()
        .filter(|url| !url.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Where to go after a successful login.
///
/// Admins always land on the dashboard; everybody else goes back to the
/// `redirect` query parameter when it is a local path, or home.
pub fn login_redirect(user: &User, redirect: Option<&str>) -> String {
    if user.role == Role::Admin {
        return "/admin".to_string();
    }
    redirect
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .unwrap_or("/")
        .to_string()
}
