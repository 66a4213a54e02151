//! Artist and tattoo catalog
//!
//! CRUD over the `artists` and `tattoos` collections. Artist profiles are
//! upserted keyed on the external authenticated user id; tattoo mutations
//! pass the ownership guard first. Validation happens before any write, so
//! a rejected request never leaves partial state.

use std::sync::Arc;

use serde_json::json;

use crate::models::{Artist, ArtistProfile, Tattoo, TattooPatch, TattooUpload};
use crate::store::{self, DocumentStore, ARTISTS, TATTOOS};
use crate::time;
use crate::{Error, Result};

#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn DocumentStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    // ---- read side -------------------------------------------------------

    pub async fn artists(&self) -> Result<Vec<Artist>> {
        Ok(store::decode_all(self.store.list(ARTISTS).await?))
    }

    pub async fn artist(&self, id: &str) -> Result<Option<Artist>> {
        match self.store.get(ARTISTS, id).await? {
            Some(doc) => Ok(Some(store::decode(doc)?)),
            None => Ok(None),
        }
    }

    pub async fn tattoos(&self) -> Result<Vec<Tattoo>> {
        Ok(store::decode_all(self.store.list(TATTOOS).await?))
    }

    pub async fn tattoos_by_artist(&self, artist_id: &str) -> Result<Vec<Tattoo>> {
        Ok(store::decode_all(
            self.store.query(TATTOOS, "artistId", artist_id).await?,
        ))
    }

    /// Resolve the artist linked to an authenticated user id
    pub async fn artist_by_user_id(&self, user_id: &str) -> Result<Option<Artist>> {
        let mut matches = self.store.query(ARTISTS, "userId", user_id).await?;
        if matches.is_empty() {
            return Ok(None);
        }
        Ok(Some(store::decode(matches.remove(0))?))
    }

    /// The acting artist's own catalog; empty when no profile exists yet
    pub async fn my_tattoos(&self, user_id: &str) -> Result<Vec<Tattoo>> {
        match self.artist_by_user_id(user_id).await? {
            Some(artist) => self.tattoos_by_artist(&artist.id).await,
            None => Ok(Vec::new()),
        }
    }

    // ---- artist profile --------------------------------------------------

    /// Create or update the artist profile for an authenticated user.
    ///
    /// Keyed on the user id: the lookup-before-create keeps at most one
    /// artist per user. Returns the artist document id.
    pub async fn upsert_artist(&self, user_id: &str, profile: ArtistProfile) -> Result<String> {
        profile.validate()?;

        let now = time::epoch_millis();
        let mut fields = store::encode(&profile)?;
        fields["userId"] = json!(user_id);
        fields["updatedAt"] = json!(now);

        match self.artist_by_user_id(user_id).await? {
            Some(existing) => {
                self.store.update(ARTISTS, &existing.id, fields).await?;
                Ok(existing.id)
            }
            None => {
                fields["createdAt"] = json!(now);
                let id = store::new_doc_id();
                self.store.set(ARTISTS, &id, fields, false).await?;
                Ok(id)
            }
        }
    }

    // ---- tattoo lifecycle ------------------------------------------------

    /// Upload a new tattoo for the acting artist.
    ///
    /// Fails with `NotFound` when the user has no artist profile yet.
    pub async fn upload_tattoo(&self, user_id: &str, upload: TattooUpload) -> Result<String> {
        upload.validate()?;

        let artist = self
            .artist_by_user_id(user_id)
            .await?
            .ok_or_else(|| Error::NotFound("artist profile for acting user".into()))?;

        let now = time::epoch_millis();
        let mut fields = store::encode(&upload)?;
        fields["artistId"] = json!(artist.id);
        fields["createdAt"] = json!(now);
        fields["updatedAt"] = json!(now);

        let id = store::new_doc_id();
        self.store.set(TATTOOS, &id, fields, false).await?;
        Ok(id)
    }

    /// Apply a partial update to a tattoo owned by the acting artist
    pub async fn update_tattoo(
        &self,
        user_id: &str,
        tattoo_id: &str,
        patch: TattooPatch,
    ) -> Result<()> {
        patch.validate()?;
        self.assert_tattoo_ownership(user_id, tattoo_id).await?;

        let mut fields = store::encode(&patch)?;
        fields["updatedAt"] = json!(time::epoch_millis());
        self.store.update(TATTOOS, tattoo_id, fields).await
    }

    /// Delete a tattoo owned by the acting artist
    pub async fn delete_tattoo(&self, user_id: &str, tattoo_id: &str) -> Result<()> {
        self.assert_tattoo_ownership(user_id, tattoo_id).await?;
        self.store.delete(TATTOOS, tattoo_id).await
    }

    /// Ownership guard for tattoo mutations.
    ///
    /// `NotFound` when the target does not exist at all; `PermissionDenied`
    /// when it exists but belongs to a different artist (or the acting user
    /// has no artist profile). The two failures stay distinguishable.
    pub async fn assert_tattoo_ownership(&self, user_id: &str, tattoo_id: &str) -> Result<()> {
        let doc = self
            .store
            .get(TATTOOS, tattoo_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("tattoo {tattoo_id}")))?;
        let tattoo: Tattoo = store::decode(doc)?;

        match self.artist_by_user_id(user_id).await? {
            Some(artist) if artist.id == tattoo.artist_id => Ok(()),
            _ => Err(Error::PermissionDenied(format!(
                "tattoo {tattoo_id} does not belong to the acting artist"
            ))),
        }
    }
}
