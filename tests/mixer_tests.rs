mod common;

use common::FakeSound;
use glam::Vec2;
use mixer_core::*;

const VIEWPORT: Vec2 = Vec2::new(1024.0, 768.0);
const ITEM: Vec2 = Vec2::new(80.0, 80.0);

fn mixer() -> Mixer<FakeSound> {
    let (board, _) = Board::from_identities(MONSTERS.iter().map(|m| m.id));
    Mixer::new(MixerConfig::default(), board)
}

fn container(side: Side) -> Option<Vec2> {
    match side {
        Side::Left => Some(Vec2::new(0.0, 100.0)),
        Side::Right => Some(Vec2::new(800.0, 100.0)),
    }
}

/// Drag `id` to `to` and release; settle the resulting start successfully.
fn drop_at(m: &mut Mixer<FakeSound>, id: &str, to: Vec2) -> Option<FakeSound> {
    m.begin_drag(id, Vec2::new(5.0, 5.0), Vec2::ZERO).unwrap();
    m.update_drag(to, ITEM, VIEWPORT);
    let outcome = m.end_drag(container).unwrap();
    assert_eq!(outcome.drop.id, id);
    outcome.start.map(|req| {
        let sound = FakeSound::playing();
        assert_eq!(m.settle_start(req, Ok(sound.clone())), Settled::Started);
        sound
    })
}

#[test]
fn drop_activates_sound_once_per_round() {
    let mut m = mixer();
    assert!(drop_at(&mut m, "monster-bowgart", Vec2::new(300.0, 300.0)).is_some());
    assert_eq!(m.sounds().active().len(), 1);

    assert!(drop_at(&mut m, "monster-bowgart", Vec2::new(500.0, 200.0)).is_none());
    assert_eq!(m.sounds().active().len(), 1);
    assert!(m.sounds().has_played("monster-bowgart"));
}

#[test]
fn settle_item_clears_dragging_flag() {
    let mut m = mixer();
    drop_at(&mut m, "monster-congle", Vec2::new(200.0, 200.0));
    assert!(m.board().get("monster-congle").unwrap().dragging);
    assert!(m.settle_item("monster-congle"));
    assert!(!m.board().get("monster-congle").unwrap().dragging);
    assert!(!m.settle_item("monster-congle"));
}

#[test]
fn settle_item_waits_while_item_is_dragged_again() {
    let mut m = mixer();
    drop_at(&mut m, "monster-maw", Vec2::new(200.0, 200.0));
    m.begin_drag("monster-maw", Vec2::ZERO, Vec2::ZERO).unwrap();
    assert!(!m.settle_item("monster-maw"));
    assert!(m.board().get("monster-maw").unwrap().dragging);
}

#[test]
fn reset_after_three_drops_clears_everything() {
    let mut m = mixer();
    let ids = ["monster-bowgart", "monster-xyster", "monster-viveine"];
    let sounds: Vec<FakeSound> = ids
        .iter()
        .map(|id| drop_at(&mut m, id, Vec2::new(400.0, 400.0)).unwrap())
        .collect();
    assert_eq!(m.sounds().active().len(), 3);
    assert!(ids.iter().all(|id| !m.board().get(id).unwrap().is_home()));

    m.reset_all();
    assert!(m.sounds().active().is_empty());
    assert_eq!(m.sounds().played_count(), 0);
    for id in ids {
        let item = m.board().get(id).unwrap();
        assert!(item.is_home(), "{id} kept overrides");
        assert_eq!(item.placement, Placement::home(item.side()));
        assert_eq!(item.placement.z_index(), None);
    }
    assert!(sounds.iter().all(|s| !s.0.playing.get() && s.0.position.get() == 0.0));
}

#[test]
fn reset_mid_drag_abandons_the_drag() {
    let mut m = mixer();
    m.begin_drag("monster-entbrat", Vec2::ZERO, Vec2::new(10.0, 10.0))
        .unwrap();
    m.reset_all();
    assert!(!m.drag().is_active());
    assert!(m.board().get("monster-entbrat").unwrap().is_home());
    assert!(m.end_drag(container).is_none());
}

#[test]
fn pointer_up_without_drag_does_nothing() {
    let mut m = mixer();
    assert!(m.end_drag(container).is_none());
    assert!(m.sounds().active().is_empty());
}

#[test]
fn config_defaults_and_override() {
    let config = MixerConfig::default();
    assert_eq!(config.audio_dir, "audio");
    assert_eq!(config.settle_delay_ms, SETTLE_DELAY_MS);

    let (board, _) = Board::from_identities(["monster-deedge"]);
    let mut m: Mixer<FakeSound> =
        Mixer::new(MixerConfig::default().with_audio_dir("sfx"), board);
    assert_eq!(m.activate("monster-deedge").unwrap().url, "sfx/deedge.mp3");
}
