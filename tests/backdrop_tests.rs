//! Integration tests for the scroll/section/scene coupling.
//!
//! These drive the public API the way the window layer does, without a
//! window: scroll reports go through the coordinator, the scene regenerates
//! its field, and frames are advanced headless.

use driftfield::prelude::*;
use driftfield::SECTION_IDS;

fn headless_scene(width: f32, height: f32) -> SceneRenderer {
    SceneRenderer::new(
        width,
        height,
        SceneMode::Wireframe,
        ParticleField::with_seed(0xABCD),
    )
}

// ============================================================================
// Population sizing across resize and mode change
// ============================================================================

#[test]
fn test_population_follows_viewport_and_mode() {
    let mut scene = headless_scene(1000.0, 1000.0);
    assert_eq!(scene.field().len(), 100);

    // Quadrupling the area is absorbed by the base cap.
    scene.resize(2000.0, 2000.0);
    assert_eq!(scene.field().len(), 100);

    // The densest mode doubles the capped base.
    scene.set_mode(SceneMode::Final);
    assert_eq!(scene.field().len(), 200);

    // Shrinking below the cap scales with area again: 640x480 -> 30.72
    // base -> ceil(61.44) with the Final multiplier.
    scene.resize(640.0, 480.0);
    assert_eq!(scene.field().len(), 62);
}

#[test]
fn test_resize_burst_last_call_wins() {
    let mut scene = headless_scene(1000.0, 1000.0);
    for w in [900.0, 1100.0, 300.0, 1250.0] {
        scene.resize(w, 1000.0);
    }
    assert_eq!(scene.viewport(), (1250.0, 1000.0));
    assert_eq!(scene.field().len(), 100); // 125 base capped at 100
    for p in scene.field().particles() {
        assert!(p.x < 1250.0);
        assert!(p.y < 1000.0);
    }
}

// ============================================================================
// Section walkthrough
// ============================================================================

#[test]
fn test_full_section_walkthrough_mode_sequence() {
    let expected = [
        SceneMode::Wireframe,
        SceneMode::Wireframe,
        SceneMode::Garden,
        SceneMode::Garden,
        SceneMode::Garden,
        SceneMode::Final,
        SceneMode::Final,
        SceneMode::Final,
        SceneMode::Final,
    ];
    for (ordinal, want) in expected.into_iter().enumerate() {
        assert_eq!(scene_mode_for(ordinal), want);
    }
}

#[test]
fn test_scroll_drive_end_to_end() {
    let mut scene = headless_scene(1000.0, 1000.0);
    let mut state = AppState::new();
    let mut coord = ScrollCoordinator::new(PageLayout::uniform(1000.0));

    // Scroll straight to the quiz section (ordinal 7).
    coord.on_scroll(7000.0, 1000.0, &mut state, &mut scene);
    assert_eq!(state.current_section(), "quiz");
    assert_eq!(state.scene_mode(), SceneMode::Final);
    assert_eq!(scene.field().len(), 200);
    assert_eq!(state.background_layer(), "final");
    assert!(state.nav_active(7));

    // Back up into the wireframe opening.
    coord.on_scroll(500.0, 1000.0, &mut state, &mut scene);
    assert_eq!(state.current_section(), "tutorial");
    assert_eq!(state.scene_mode(), SceneMode::Wireframe);
    assert_eq!(scene.field().len(), 100);

    // A frame still renders after all of that churn.
    let mut out = Vec::new();
    scene.render_frame(&mut out);
    assert!(out.iter().filter(|c| c.is_circle()).count() == 100);
}

#[test]
fn test_scroll_jitter_never_restarts_field() {
    let mut scene = headless_scene(1000.0, 1000.0);
    let mut state = AppState::new();
    let mut coord = ScrollCoordinator::new(PageLayout::uniform(1000.0));

    coord.on_scroll(4000.0, 1000.0, &mut state, &mut scene);
    let generation = scene.field().generation();

    // Jitter around inside the section and wander across a same-mode
    // boundary: neither may regenerate.
    for y in [4001.0, 3999.5, 4010.0, 3000.0, 2500.0] {
        coord.on_scroll(y, 1000.0, &mut state, &mut scene);
    }
    assert_eq!(scene.field().generation(), generation);
    assert_eq!(state.scene_mode(), SceneMode::Garden);
}

// ============================================================================
// Continuous rendering across mode changes
// ============================================================================

#[test]
fn test_frames_keep_flowing_across_mode_changes() {
    let mut scene = headless_scene(800.0, 600.0);
    let mut out = Vec::new();

    for i in 0..30 {
        if i == 10 {
            scene.set_mode(SceneMode::Garden);
        }
        if i == 20 {
            scene.set_mode(SceneMode::Final);
        }
        scene.render_frame(&mut out);
        let circles = out.iter().filter(|c| c.is_circle()).count();
        assert_eq!(circles, scene.field().len());
        for p in scene.field().particles() {
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
        }
    }
    assert_eq!(scene.frame(), 30);
}

#[test]
fn test_seeded_fields_replay_identically() {
    let mut a = SceneRenderer::new(640.0, 480.0, SceneMode::Garden, ParticleField::with_seed(9));
    let mut b = SceneRenderer::new(640.0, 480.0, SceneMode::Garden, ParticleField::with_seed(9));

    let (mut out_a, mut out_b) = (Vec::new(), Vec::new());
    for _ in 0..5 {
        a.render_frame(&mut out_a);
        b.render_frame(&mut out_b);
        assert_eq!(out_a, out_b);
    }
}

// ============================================================================
// Track sanity
// ============================================================================

#[test]
fn test_track_matches_page_sections() {
    let track = SectionTrack::new();
    assert_eq!(track.len(), SECTION_IDS.len());
    assert_eq!(track.id(0), "hero");
    assert_eq!(track.ordinal_of("find"), Some(8));

    let layout = PageLayout::uniform(750.0);
    assert_eq!(layout.total_height(), 9.0 * 750.0);
}
