//! Per-artist like aggregation
//!
//! Pure and stateless: a function of the current like list and the
//! tattoo→artist mapping, recomputed on every query and never cached.

use std::collections::HashMap;

use crate::models::{ArtistScore, Like};

/// Aggregate a viewer's likes by owning artist.
///
/// `tattoo_artists` maps tattoo id to the owning artist id. Likes whose
/// tattoo is absent from the mapping (deleted since it was liked) are
/// silently skipped. The score is the unweighted like count; output order
/// is unspecified, ranking belongs to the caller.
pub fn score_likes(
    likes: &[Like],
    tattoo_artists: &HashMap<String, String>,
) -> HashMap<String, ArtistScore> {
    let mut scores: HashMap<String, ArtistScore> = HashMap::new();

    for like in likes {
        let Some(artist_id) = tattoo_artists.get(&like.tattoo_id) else {
            continue;
        };
        let entry = scores
            .entry(artist_id.clone())
            .or_insert_with(|| ArtistScore {
                artist_id: artist_id.clone(),
                score: 0.0,
                liked_tattoos: 0,
            });
        entry.liked_tattoos += 1;
        entry.score = entry.liked_tattoos as f64;
    }

    scores
}
