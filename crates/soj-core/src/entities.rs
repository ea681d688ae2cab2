//! Listing entity structs mirroring the backend's JSON.
//!
//! All collections share the id/title/author/timestamps core; each kind adds
//! the fields its screens display. Unknown fields from the backend are
//! ignored by serde's default behavior.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A condo listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condo {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub monthly_rent: Option<i64>,
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub author_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A hotel listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hotel {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub nightly_rate: Option<i64>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub author_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A course or class listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub schedule: Option<String>,
    pub fee: Option<i64>,
    pub author_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A restaurant listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub cuisine: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub author_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A shared document (visa guides, forms, announcements).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub category: Option<String>,
    pub author_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A general community post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralPost {
    pub id: String,
    pub title: String,
    pub body: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub author_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A travel post (itineraries, trip reports).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TravelPost {
    pub id: String,
    pub title: String,
    pub body: Option<String>,
    pub destination: Option<String>,
    #[serde(default)]
    pub image_urls: Vec<String>,
    pub author_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// The signed-in user's editable profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub user_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}
