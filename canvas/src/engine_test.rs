#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::NODE_COUNT;
use crate::drift::Node;
use crate::test_support::{DrawOp, RecordingSurface};

fn positions(core: &AnimatorCore) -> Vec<(f64, f64)> {
    core.state.nodes.iter().map(|n| (n.x, n.y)).collect()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn seeded_core_starts_live_with_default_layout() {
    let core = AnimatorCore::seeded(1, CancelToken::new());
    assert!(core.is_live());
    assert_eq!(core.frames(), 0);
    assert_eq!(core.state.nodes.len(), NODE_COUNT);
}

#[test]
fn seeded_core_is_reproducible() {
    let a = AnimatorCore::seeded(99, CancelToken::new());
    let b = AnimatorCore::seeded(99, CancelToken::new());
    assert_eq!(a.state, b.state);
}

// =============================================================
// Ticking
// =============================================================

#[test]
fn tick_advances_and_draws() {
    let mut core = AnimatorCore::seeded(2, CancelToken::new());
    let before = positions(&core);
    let mut surface = RecordingSurface::new();

    assert_eq!(core.tick(&mut surface), FrameOutcome::Drawn);
    assert_eq!(core.frames(), 1);
    assert_ne!(positions(&core), before);
    assert!(matches!(surface.ops.first(), Some(DrawOp::Clear { .. })));
    assert_eq!(surface.circles().len(), NODE_COUNT * 2);
}

#[test]
fn tick_draws_post_update_positions() {
    let mut core = AnimatorCore::seeded(3, CancelToken::new());
    let mut surface = RecordingSurface::new();
    core.tick(&mut surface);

    let first = &core.state.nodes[0];
    let drawn_at = surface.ops.iter().find_map(|op| match op {
        DrawOp::Circle { center, .. } => Some(*center),
        _ => None,
    });
    assert_eq!(drawn_at, Some(first.position()));
}

#[test]
fn many_ticks_keep_count() {
    let mut core = AnimatorCore::seeded(4, CancelToken::new());
    for _ in 0..500 {
        let mut surface = RecordingSurface::new();
        core.tick(&mut surface);
    }
    assert_eq!(core.frames(), 500);
    assert_eq!(core.state.nodes.len(), NODE_COUNT);
}

#[test]
fn failed_paint_is_skipped_but_positions_advance() {
    let mut core = AnimatorCore::seeded(5, CancelToken::new());
    let before = positions(&core);
    let mut surface = RecordingSurface::failing();

    assert_eq!(core.tick(&mut surface), FrameOutcome::Skipped);
    assert_eq!(core.skipped(), 1);
    assert_eq!(core.frames(), 1);
    assert_ne!(positions(&core), before);
    assert!(core.is_live());
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn unmount_freezes_state() {
    let mut core = AnimatorCore::seeded(6, CancelToken::new());
    let mut surface = RecordingSurface::new();
    core.tick(&mut surface);
    core.unmount();

    let frozen = core.state.clone();
    let mut after = RecordingSurface::new();
    for _ in 0..100 {
        assert_eq!(core.tick(&mut after), FrameOutcome::Stopped);
    }
    assert_eq!(core.state, frozen);
    assert_eq!(core.frames(), 1);
    assert!(after.ops.is_empty());
}

#[test]
fn cancelling_external_token_stops_core() {
    let token = CancelToken::new();
    let mut core = AnimatorCore::seeded(7, token.clone());
    token.cancel();

    let mut surface = RecordingSurface::new();
    assert_eq!(core.tick(&mut surface), FrameOutcome::Stopped);
    assert!(!core.is_live());
}

#[test]
fn core_token_controls_core() {
    let mut core = AnimatorCore::seeded(8, CancelToken::new());
    core.token().cancel();
    let mut surface = RecordingSurface::new();
    assert_eq!(core.tick(&mut surface), FrameOutcome::Stopped);
}

#[test]
fn custom_state_is_ticked_in_place() {
    let node = Node { id: 0, x: 100.0, y: 100.0, vx: 0.5, vy: -0.25, color: "#3b82f6" };
    let state = DriftState::from_nodes(vec![node], Bounds::default(), DriftConfig::default());
    let mut core = AnimatorCore::new(state, CancelToken::new());
    let mut surface = RecordingSurface::new();
    core.tick(&mut surface);
    assert_eq!(core.state.nodes[0].x, 100.5);
    assert_eq!(core.state.nodes[0].y, 99.75);
}
