//! Shared numeric and style constants for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Logical width of the preview surface.
pub const SURFACE_WIDTH: f64 = 600.0;

/// Logical height of the preview surface.
pub const SURFACE_HEIGHT: f64 = 380.0;

/// Distance from each surface edge at which nodes bounce.
pub const EDGE_MARGIN: f64 = 20.0;

// ── Layout ──────────────────────────────────────────────────────

/// Number of nodes in the drifting graph.
pub const NODE_COUNT: usize = 18;

/// Centre of the initial ring, X.
pub const RING_CENTER_X: f64 = 300.0;

/// Centre of the initial ring, Y.
pub const RING_CENTER_Y: f64 = 200.0;

/// Radius of the initial ring.
pub const RING_RADIUS: f64 = 100.0;

/// Upper bound on each velocity component, in units per frame.
pub const MAX_SPEED: f64 = 0.15;

/// Nodes closer than this are joined by an edge.
pub const LINK_DISTANCE: f64 = 150.0;

// ── Style ───────────────────────────────────────────────────────

/// Node color palette.
pub const PALETTE: [&str; 5] = ["#6366f1", "#a855f7", "#3b82f6", "#8b5cf6", "#ec4899"];

/// Stroke style for proximity edges.
pub const EDGE_STROKE: &str = "rgba(200, 200, 220, 0.15)";

/// Stroke width for proximity edges.
pub const EDGE_WIDTH: f64 = 1.0;

/// Outer glow radius.
pub const GLOW_RADIUS: f64 = 12.0;

/// Two-digit hex alpha appended to the node color for the glow.
pub const GLOW_ALPHA_HEX: &str = "20";

/// Opaque core radius.
pub const CORE_RADIUS: f64 = 6.0;
