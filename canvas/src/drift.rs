//! Node-drift simulation: the point set behind the graph preview.
//!
//! A [`DriftState`] owns every node, the bounding rectangle they bounce in and
//! the configuration they were built from. [`advance`] moves the whole set by
//! one frame. Nothing here touches the browser, so the simulation runs (and is
//! tested) natively.
//!
//! Bouncing is a single-step velocity flip, not a clamp: when a node's next
//! position would leave `[margin, extent - margin]` on an axis, that axis'
//! velocity is negated and the step is recomputed once. A node can therefore
//! sit up to one velocity step past the margin for a frame.

#[cfg(test)]
#[path = "drift_test.rs"]
mod drift_test;

use std::f64::consts::TAU;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::consts::{
    EDGE_MARGIN, LINK_DISTANCE, MAX_SPEED, NODE_COUNT, PALETTE, RING_CENTER_X, RING_CENTER_Y, RING_RADIUS,
    SURFACE_HEIGHT, SURFACE_WIDTH,
};

/// A point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// The rectangle nodes bounce inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { width: SURFACE_WIDTH, height: SURFACE_HEIGHT, margin: EDGE_MARGIN }
    }
}

impl Bounds {
    #[must_use]
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self { width, height, margin }
    }

    /// Lowest allowed coordinate on either axis.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.margin
    }

    /// Highest allowed X coordinate.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.width - self.margin
    }

    /// Highest allowed Y coordinate.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.height - self.margin
    }
}

/// Construction parameters for a [`DriftState`].
#[derive(Debug, Clone, PartialEq)]
pub struct DriftConfig {
    pub node_count: usize,
    pub center: Point,
    pub radius: f64,
    /// Each velocity component is drawn from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    /// Pairs strictly closer than this are linked.
    pub link_distance: f64,
    pub palette: &'static [&'static str],
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            node_count: NODE_COUNT,
            center: Point::new(RING_CENTER_X, RING_CENTER_Y),
            radius: RING_RADIUS,
            max_speed: MAX_SPEED,
            link_distance: LINK_DISTANCE,
            palette: &PALETTE,
        }
    }
}

/// One drifting node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// CSS hex color, fixed for the node's lifetime.
    pub color: &'static str,
}

impl Node {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move one frame, bouncing off `bounds` on each axis independently.
    pub fn advance(&mut self, bounds: &Bounds) {
        self.x = reflect(self.x, &mut self.vx, bounds.min(), bounds.max_x());
        self.y = reflect(self.y, &mut self.vy, bounds.min(), bounds.max_y());
    }
}

/// Single-step bounce along one axis. Returns the committed coordinate.
fn reflect(pos: f64, vel: &mut f64, lo: f64, hi: f64) -> f64 {
    let next = pos + *vel;
    if next < lo || next > hi {
        *vel = -*vel;
        return pos + *vel;
    }
    next
}

/// The full animation state: nodes, the box they live in, and their config.
#[derive(Debug, Clone, PartialEq)]
pub struct DriftState {
    pub nodes: Vec<Node>,
    pub bounds: Bounds,
    pub config: DriftConfig,
}

impl DriftState {
    /// Lay `config.node_count` nodes evenly on the configured ring, drawing
    /// colors and velocities from `rng`.
    pub fn new<R: Rng + ?Sized>(config: DriftConfig, bounds: Bounds, rng: &mut R) -> Self {
        let count = config.node_count;
        let nodes = (0..count)
            .map(|id| {
                #[allow(clippy::cast_precision_loss)]
                let angle = id as f64 / count as f64 * TAU;
                Node {
                    id,
                    x: config.center.x + angle.cos() * config.radius,
                    y: config.center.y + angle.sin() * config.radius,
                    vx: random_speed(rng, config.max_speed),
                    vy: random_speed(rng, config.max_speed),
                    color: config.palette.choose(rng).copied().unwrap_or(PALETTE[0]),
                }
            })
            .collect();
        Self { nodes, bounds, config }
    }

    /// Build a state from an explicit node list.
    #[must_use]
    pub fn from_nodes(nodes: Vec<Node>, bounds: Bounds, config: DriftConfig) -> Self {
        Self { nodes, bounds, config }
    }

    /// Advance every node by one frame in place.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for node in &mut self.nodes {
            node.advance(&bounds);
        }
    }

    /// Index pairs `(i, j)`, `i < j`, whose nodes are strictly closer than
    /// the link distance. Recomputed on every call.
    #[must_use]
    pub fn proximity_edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for (i, a) in self.nodes.iter().enumerate() {
            for (j, b) in self.nodes.iter().enumerate().skip(i + 1) {
                if is_linked(a.position(), b.position(), self.config.link_distance) {
                    edges.push((i, j));
                }
            }
        }
        edges
    }
}

/// Whether two points are close enough to draw an edge between them.
///
/// Exclusive: a pair exactly `threshold` apart is not linked.
#[must_use]
pub fn is_linked(a: Point, b: Point, threshold: f64) -> bool {
    a.distance(b) < threshold
}

/// Move the whole point set forward one frame.
#[must_use]
pub fn advance(mut state: DriftState) -> DriftState {
    state.step();
    state
}

fn random_speed<R: Rng + ?Sized>(rng: &mut R, max_speed: f64) -> f64 {
    if max_speed > 0.0 {
        rng.random_range(-max_speed..max_speed)
    } else {
        0.0
    }
}
