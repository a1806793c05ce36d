use std::collections::HashMap;
use uuid::Uuid;

use crate::db::models::task::{PhotoPhase, PhotoUpload};

/// Sentinel place key for photos with neither a spot nor a location tag.
/// All unlocated photos share one ambiguous place.
const NO_LOCATION: &str = "no_loc";

fn place_key(photo: &PhotoUpload) -> String {
    if let Some(spot) = photo.spot_id {
        return spot.to_string();
    }
    match photo.location_tag.as_deref() {
        Some(tag) if !tag.is_empty() => tag.to_string(),
        _ => NO_LOCATION.to_string(),
    }
}

/// Assigns pair ids linking each "before" photo to its corresponding "after"
/// at the same place. Single deterministic pass in client-submission order:
///
/// - before: mint a fresh pair id and remember it per place key. A later
///   "before" at the same place overwrites the entry, silently orphaning the
///   earlier one. Accepted lossy behavior, not an error.
/// - after: reuse the remembered pair id for the place, else mint a fresh one
///   (an orphan "after" with no matching "before").
/// - other: reuse if remembered, otherwise stay unpaired.
///
/// Photos that arrive with an explicit pair id keep it verbatim and are
/// skipped entirely. `mint` is injected so tests control id generation; the
/// function itself never fails.
pub fn assign_pair_ids<F>(photos: &mut [PhotoUpload], mut mint: F)
where
    F: FnMut() -> Uuid,
{
    let mut last_before_for_place: HashMap<String, Uuid> = HashMap::new();

    for photo in photos.iter_mut() {
        let key = place_key(photo);

        // Client-assigned pairing wins; the photo takes no part in the pass.
        if photo.pair_id.is_some() {
            continue;
        }

        match photo.phase {
            PhotoPhase::Before => {
                let fresh = mint();
                last_before_for_place.insert(key, fresh);
                photo.pair_id = Some(fresh);
            }
            PhotoPhase::After => {
                let paired = last_before_for_place
                    .get(&key)
                    .copied()
                    .unwrap_or_else(&mut mint);
                photo.pair_id = Some(paired);
            }
            PhotoPhase::Other => {
                photo.pair_id = last_before_for_place.get(&key).copied();
            }
        }
    }
}
