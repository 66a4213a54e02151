//! Top-artists ranking
//!
//! Orchestrates the like ledger, the scoring engine, and artist lookup into
//! the bounded, ordered result the gallery shows a viewer.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::likes::LikeLedger;
use crate::models::{ArtistScore, RankedArtist, Tattoo};
use crate::scoring::score_likes;
use crate::store::{self, DocumentStore, ARTISTS, TATTOOS};
use crate::viewer::ViewerId;
use crate::Result;

/// Default number of ranked artists returned to a viewer
pub const DEFAULT_TOP_ARTISTS: usize = 5;

/// Computes a viewer's best-matching artists from their like history
#[derive(Clone)]
pub struct Recommender {
    store: Arc<dyn DocumentStore>,
    ledger: LikeLedger,
}

impl Recommender {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            ledger: LikeLedger::new(store.clone()),
            store,
        }
    }

    /// Ranked artists for a viewer, best match first.
    ///
    /// Sorted by score descending with ties broken by artist id ascending,
    /// truncated to `limit`, then enriched with the full artist record.
    /// Likes whose tattoo or artist no longer resolves are dropped rather
    /// than surfaced as broken entries. An empty result means "not enough
    /// data yet" and is distinct from a store failure, which propagates.
    pub async fn top_artists(&self, viewer: &ViewerId, limit: usize) -> Result<Vec<RankedArtist>> {
        let likes = self.ledger.get_likes(viewer).await?;
        if likes.is_empty() {
            return Ok(Vec::new());
        }

        // Resolve each liked tattoo to its owning artist; deleted tattoos
        // simply drop out of the mapping
        let mut tattoo_artists = HashMap::new();
        for like in &likes {
            if let Some(doc) = self.store.get(TATTOOS, &like.tattoo_id).await? {
                if let Ok(tattoo) = store::decode::<Tattoo>(doc) {
                    tattoo_artists.insert(like.tattoo_id.clone(), tattoo.artist_id);
                }
            }
        }

        let mut scores: Vec<ArtistScore> =
            score_likes(&likes, &tattoo_artists).into_values().collect();
        scores.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.artist_id.cmp(&b.artist_id))
        });
        scores.truncate(limit);

        // Enrich surviving entries for display; artists deleted since the
        // likes were recorded are dropped
        let mut ranked = Vec::with_capacity(scores.len());
        for score in scores {
            let Some(doc) = self.store.get(ARTISTS, &score.artist_id).await? else {
                continue;
            };
            let Ok(artist) = store::decode(doc) else {
                continue;
            };
            ranked.push(RankedArtist {
                artist,
                score: score.score,
                liked_tattoos: score.liked_tattoos,
            });
        }
        Ok(ranked)
    }
}
