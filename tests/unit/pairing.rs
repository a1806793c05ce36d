use uuid::Uuid;

use snapwise_backend::db::models::task::{PhotoPhase, PhotoStatus, PhotoUpload};
use snapwise_backend::utils::photo_pairing::assign_pair_ids;

fn photo(phase: PhotoPhase, spot_id: Option<Uuid>, location_tag: Option<&str>) -> PhotoUpload {
    PhotoUpload {
        id: Uuid::new_v4().to_string(),
        file_name: "site.jpg".to_string(),
        data_url: None,
        mime_type: Some("image/jpeg".to_string()),
        size: Some(1024),
        phase,
        status: PhotoStatus::InProgress,
        description: None,
        employees_on_task: 2,
        materials: vec![],
        started_at: None,
        finished_at: None,
        duration_mins: 0,
        location_tag: location_tag.map(|t| t.to_string()),
        captured_at: None,
        capture_group_id: None,
        spot_id,
        pair_id: None,
    }
}

/// Mint that yields 1, 2, 3, ... as uuids so assertions are exact.
fn sequential_mint() -> impl FnMut() -> Uuid {
    let mut n: u128 = 0;
    move || {
        n += 1;
        Uuid::from_u128(n)
    }
}

#[test]
fn before_and_after_at_same_spot_share_a_pair_id() {
    let spot = Uuid::new_v4();
    let mut photos = vec![
        photo(PhotoPhase::Before, Some(spot), None),
        photo(PhotoPhase::After, Some(spot), None),
    ];

    assign_pair_ids(&mut photos, sequential_mint());

    assert_eq!(photos[0].pair_id, Some(Uuid::from_u128(1)));
    assert_eq!(photos[1].pair_id, Some(Uuid::from_u128(1)));
}

#[test]
fn pairing_is_scoped_per_place() {
    let spot_a = Uuid::new_v4();
    let spot_b = Uuid::new_v4();
    let mut photos = vec![
        photo(PhotoPhase::Before, Some(spot_a), None),
        photo(PhotoPhase::Before, Some(spot_b), None),
        photo(PhotoPhase::After, Some(spot_b), None),
        photo(PhotoPhase::After, Some(spot_a), None),
    ];

    assign_pair_ids(&mut photos, sequential_mint());

    assert_eq!(photos[0].pair_id, photos[3].pair_id);
    assert_eq!(photos[1].pair_id, photos[2].pair_id);
    assert_ne!(photos[0].pair_id, photos[1].pair_id);
}

#[test]
fn location_tag_is_the_place_when_no_spot_is_set() {
    let mut photos = vec![
        photo(PhotoPhase::Before, None, Some("kitchen")),
        photo(PhotoPhase::Before, None, Some("hallway")),
        photo(PhotoPhase::After, None, Some("kitchen")),
    ];

    assign_pair_ids(&mut photos, sequential_mint());

    assert_eq!(photos[0].pair_id, photos[2].pair_id);
    assert_ne!(photos[0].pair_id, photos[1].pair_id);
}

#[test]
fn unlocated_photos_share_one_ambiguous_place() {
    let mut photos = vec![
        photo(PhotoPhase::Before, None, None),
        photo(PhotoPhase::After, None, None),
    ];

    assign_pair_ids(&mut photos, sequential_mint());

    assert_eq!(photos[0].pair_id, photos[1].pair_id);
}

#[test]
fn second_before_at_same_place_orphans_the_first() {
    let spot = Uuid::new_v4();
    let mut photos = vec![
        photo(PhotoPhase::Before, Some(spot), None),
        photo(PhotoPhase::Before, Some(spot), None),
        photo(PhotoPhase::After, Some(spot), None),
    ];

    assign_pair_ids(&mut photos, sequential_mint());

    // the after links to the latest before; the first keeps its now-orphaned id
    assert_eq!(photos[0].pair_id, Some(Uuid::from_u128(1)));
    assert_eq!(photos[1].pair_id, Some(Uuid::from_u128(2)));
    assert_eq!(photos[2].pair_id, Some(Uuid::from_u128(2)));
}

#[test]
fn orphan_after_gets_a_fresh_pair_id() {
    let mut photos = vec![photo(PhotoPhase::After, None, Some("basement"))];

    assign_pair_ids(&mut photos, sequential_mint());

    assert_eq!(photos[0].pair_id, Some(Uuid::from_u128(1)));
}

#[test]
fn other_phase_joins_an_existing_pair_but_never_mints() {
    let spot = Uuid::new_v4();
    let mut photos = vec![
        photo(PhotoPhase::Other, Some(spot), None),
        photo(PhotoPhase::Before, Some(spot), None),
        photo(PhotoPhase::Other, Some(spot), None),
    ];

    assign_pair_ids(&mut photos, sequential_mint());

    // before any before exists, other stays unpaired
    assert_eq!(photos[0].pair_id, None);
    assert_eq!(photos[1].pair_id, Some(Uuid::from_u128(1)));
    assert_eq!(photos[2].pair_id, Some(Uuid::from_u128(1)));
}

#[test]
fn explicit_client_pair_id_passes_through_untouched() {
    let spot = Uuid::new_v4();
    let preassigned = Uuid::from_u128(999);

    let mut with_pair = photo(PhotoPhase::Before, Some(spot), None);
    with_pair.pair_id = Some(preassigned);

    let mut photos = vec![with_pair, photo(PhotoPhase::After, Some(spot), None)];

    assign_pair_ids(&mut photos, sequential_mint());

    // the preassigned before is skipped entirely, so it is not remembered
    // for the place and the after mints its own id
    assert_eq!(photos[0].pair_id, Some(preassigned));
    assert_eq!(photos[1].pair_id, Some(Uuid::from_u128(1)));
}

#[test]
fn pairing_is_deterministic_for_a_fixed_mint_sequence() {
    let spot = Uuid::new_v4();
    let build = || {
        vec![
            photo(PhotoPhase::Before, Some(spot), None),
            photo(PhotoPhase::After, Some(spot), None),
            photo(PhotoPhase::Before, None, Some("yard")),
            photo(PhotoPhase::Other, None, Some("yard")),
        ]
    };

    let mut first = build();
    let mut second = build();
    assign_pair_ids(&mut first, sequential_mint());
    assign_pair_ids(&mut second, sequential_mint());

    let ids = |photos: &[PhotoUpload]| photos.iter().map(|p| p.pair_id).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
}
