//! Per-viewer like ledger
//!
//! One document per viewer in the `likes` collection, holding the full like
//! list plus an `updatedAt` stamp. The list has set semantics keyed by
//! tattoo id: toggling flips membership, so at most one like per tattoo can
//! exist for a viewer.
//!
//! Consistency policy: `toggle_like` is a read-modify-write with no
//! transaction around it. Two concurrent toggles from the same viewer (two
//! browser tabs) resolve last-writer-wins on the whole list; the loser's
//! addition or removal is overwritten. This is the documented contract:
//! callers must not add locking that serializes toggles.

use std::sync::Arc;

use serde_json::json;

use crate::models::Like;
use crate::store::{DocumentStore, LIKES};
use crate::time;
use crate::viewer::ViewerId;
use crate::Result;

/// Durable record of which tattoos each viewer has liked
#[derive(Clone)]
pub struct LikeLedger {
    store: Arc<dyn DocumentStore>,
}

impl LikeLedger {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Current like list for a viewer; empty when none recorded
    pub async fn get_likes(&self, viewer: &ViewerId) -> Result<Vec<Like>> {
        let doc = self.store.get(LIKES, viewer.as_str()).await?;
        Ok(doc
            .and_then(|d| d.fields.get("likes").cloned())
            .and_then(|likes| serde_json::from_value(likes).ok())
            .unwrap_or_default())
    }

    /// Flip membership of `tattoo_id` in the viewer's like set.
    ///
    /// Returns the resulting state (true = now liked). Unliking a tattoo
    /// that was never liked is a no-op returning false.
    pub async fn toggle_like(&self, viewer: &ViewerId, tattoo_id: &str) -> Result<bool> {
        let current = self.get_likes(viewer).await?;
        let was_liked = current.iter().any(|like| like.tattoo_id == tattoo_id);

        let updated: Vec<Like> = if was_liked {
            current
                .into_iter()
                .filter(|like| like.tattoo_id != tattoo_id)
                .collect()
        } else {
            let mut likes = current;
            likes.push(Like {
                tattoo_id: tattoo_id.to_string(),
                timestamp: time::epoch_millis(),
            });
            likes
        };

        // Full-list write with merge, preserving unrelated fields of the
        // viewer document. Last-writer-wins against concurrent toggles.
        self.store
            .set(
                LIKES,
                viewer.as_str(),
                json!({ "likes": updated, "updatedAt": time::epoch_millis() }),
                true,
            )
            .await?;

        Ok(!was_liked)
    }

    /// Membership check, implemented as `get_likes` + scan
    pub async fn is_liked(&self, viewer: &ViewerId, tattoo_id: &str) -> Result<bool> {
        Ok(self
            .get_likes(viewer)
            .await?
            .iter()
            .any(|like| like.tattoo_id == tattoo_id))
    }
}
