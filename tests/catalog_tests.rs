use mixer_core::*;

#[test]
fn every_monster_has_a_sound_and_unique_identity() {
    assert_eq!(MONSTERS.len(), 10);
    for (i, m) in MONSTERS.iter().enumerate() {
        assert!(m.id.starts_with("monster-"), "{}", m.id);
        assert!(!m.sound_file.is_empty());
        assert!(
            MONSTERS[i + 1..].iter().all(|other| other.id != m.id),
            "duplicate {}",
            m.id
        );
    }
}

#[test]
fn sides_are_split_five_and_five() {
    let left: Vec<_> = MONSTERS
        .iter()
        .filter(|m| m.side == Side::Left)
        .map(|m| m.id)
        .collect();
    assert_eq!(
        left,
        [
            "monster-bowgart",
            "monster-tweedle",
            "monster-congle",
            "monster-viveine",
            "monster-maw"
        ]
    );
    assert_eq!(MONSTERS.iter().filter(|m| m.side == Side::Right).count(), 5);
}

#[test]
fn side_is_exact_match_not_substring() {
    assert_eq!(side_of("monster-maw"), Ok(Side::Left));
    assert_eq!(side_of("monster-thrumble"), Ok(Side::Right));
    // A renamed identity is a configuration error, not a silent right-side default
    assert_eq!(
        side_of("monster-maw-2"),
        Err(CatalogError::UnknownIdentity("monster-maw-2".to_string()))
    );
    assert!(side_of("bowgart").is_err());
}

#[test]
fn sound_url_joins_directory_and_file() {
    let bowgart = lookup("monster-bowgart").unwrap();
    assert_eq!(sound_url("audio", bowgart), "audio/Bowgart_1.MP3");
    assert_eq!(sound_url("assets/sfx/", bowgart), "assets/sfx/Bowgart_1.MP3");
    assert_eq!(sound_url("", bowgart), "Bowgart_1.MP3");
}

#[test]
fn board_reports_unknown_identities_and_skips_duplicates() {
    let (board, errors) = Board::from_identities([
        "monster-bowgart",
        "monster-ghost",
        "monster-deedge",
        "monster-bowgart",
    ]);
    let ids: Vec<_> = board.items().iter().map(|it| it.id()).collect();
    assert_eq!(ids, ["monster-bowgart", "monster-deedge"]);
    assert_eq!(
        errors,
        vec![CatalogError::UnknownIdentity("monster-ghost".to_string())]
    );
    assert!(board.items().iter().all(|it| it.is_home()));
}

#[test]
fn placement_stacking_order() {
    assert_eq!(Placement::home(Side::Left).z_index(), None);
    assert_eq!(
        Placement::Overlay {
            at: glam::Vec2::ZERO
        }
        .z_index(),
        Some(DRAG_Z_INDEX)
    );
    assert_eq!(
        Placement::Docked {
            side: Side::Right,
            at: Some(glam::Vec2::new(3.0, 4.0))
        }
        .z_index(),
        Some(DROPPED_Z_INDEX)
    );
}
