//! Gallery records and derived scoring types
//!
//! Stored documents use camelCase field names; optional fields are omitted
//! from serialized output entirely (the document store does not accept
//! explicit nulls for absent values).

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Tattoo artist profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Link to the external authenticated identity; at most one artist per user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// One catalog entry, owned by exactly one artist
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tattoo {
    pub id: String,
    pub artist_id: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Where the tattoo was done; can differ from the artist's location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
    /// true for color work, false for black & white
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// A viewer's endorsement of one tattoo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub tattoo_id: String,
    /// Epoch milliseconds at the moment the like was recorded
    pub timestamp: i64,
}

/// Derived per-artist ranking metric for one viewer; never persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistScore {
    pub artist_id: String,
    pub score: f64,
    pub liked_tattoos: u32,
}

/// An [`ArtistScore`] enriched with the full artist record for display
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedArtist {
    pub artist: Artist,
    pub score: f64,
    pub liked_tattoos: u32,
}

/// Artist profile fields accepted at the write boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    pub name: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ArtistProfile {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation("name is required".into()));
        }
        if self.location.trim().is_empty() {
            return Err(Error::Validation("location is required".into()));
        }
        Ok(())
    }
}

/// New tattoo fields accepted at the write boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TattooUpload {
    pub image_url: String,
    pub description: String,
    pub price: f64,
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

impl TattooUpload {
    pub fn validate(&self) -> Result<()> {
        if self.image_url.trim().is_empty() {
            return Err(Error::Validation("image URL is required".into()));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation("description is required".into()));
        }
        if self.price <= 0.0 {
            return Err(Error::Validation(
                "price is required and must be greater than 0".into(),
            ));
        }
        if self.size.trim().is_empty() {
            return Err(Error::Validation("size is required".into()));
        }
        Ok(())
    }
}

/// Partial tattoo update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TattooPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl TattooPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.image_url {
            if url.trim().is_empty() {
                return Err(Error::Validation("image URL must not be empty".into()));
            }
        }
        if let Some(description) = &self.description {
            if description.trim().is_empty() {
                return Err(Error::Validation("description must not be empty".into()));
            }
        }
        if let Some(price) = self.price {
            if price <= 0.0 {
                return Err(Error::Validation("price must be greater than 0".into()));
            }
        }
        if let Some(size) = &self.size {
            if size.trim().is_empty() {
                return Err(Error::Validation("size must not be empty".into()));
            }
        }
        Ok(())
    }
}
