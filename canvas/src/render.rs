//! Rendering: paints one frame of the drift simulation onto a [`Surface`].
//!
//! The drawing order is fixed: clear, proximity edges, then every node as a
//! translucent glow under an opaque core. [`Surface`] is the seam between the
//! frame logic and the browser; the only production implementation is
//! [`web_sys::CanvasRenderingContext2d`], whose fallible calls propagate as
//! `Result<(), JsValue>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{CORE_RADIUS, EDGE_STROKE, EDGE_WIDTH, GLOW_ALPHA_HEX, GLOW_RADIUS};
use crate::drift::{DriftState, Point};

/// A 2D drawing target for the preview.
pub trait Surface {
    type Error;

    /// Wipe the `width` x `height` area starting at the origin.
    fn clear(&mut self, width: f64, height: f64);

    /// Set the stroke used by subsequent [`Surface::line`] calls.
    fn set_stroke(&mut self, style: &str, width: f64);

    /// Stroke a straight segment.
    fn line(&mut self, from: Point, to: Point);

    /// Fill a full circle.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the arc cannot be traced.
    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), Self::Error>;
}

/// Draw the current state: clear, edges, then nodes.
///
/// # Errors
///
/// Stops at and returns the first failing surface call.
pub fn draw_frame<S: Surface>(surface: &mut S, state: &DriftState) -> Result<(), S::Error> {
    surface.clear(state.bounds.width, state.bounds.height);

    surface.set_stroke(EDGE_STROKE, EDGE_WIDTH);
    for (i, j) in state.proximity_edges() {
        surface.line(state.nodes[i].position(), state.nodes[j].position());
    }

    for node in &state.nodes {
        let center = node.position();
        surface.fill_circle(center, GLOW_RADIUS, &glow_color(node.color))?;
        surface.fill_circle(center, CORE_RADIUS, node.color)?;
    }
    Ok(())
}

/// The node color at glow opacity, as an 8-digit hex string.
#[must_use]
pub fn glow_color(color: &str) -> String {
    format!("{color}{GLOW_ALPHA_HEX}")
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn set_stroke(&mut self, style: &str, width: f64) {
        self.set_stroke_style_str(style);
        self.set_line_width(width);
    }

    fn line(&mut self, from: Point, to: Point) {
        self.begin_path();
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), JsValue> {
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, TAU)?;
        self.set_fill_style_str(color);
        self.fill();
        Ok(())
    }
}
