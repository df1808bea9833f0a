//! In-memory [`Surface`] that records draw calls for assertions.

use crate::drift::Point;
use crate::render::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    Stroke { style: String, width: f64 },
    Line { from: Point, to: Point },
    Circle { center: Point, radius: f64, color: String },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    /// When set, every `fill_circle` fails.
    pub fail_circles: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { ops: Vec::new(), fail_circles: true }
    }

    pub fn lines(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count()
    }

    pub fn circles(&self) -> Vec<(f64, String)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { radius, color, .. } => Some((*radius, color.clone())),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Error = String;

    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn set_stroke(&mut self, style: &str, width: f64) {
        self.ops.push(DrawOp::Stroke { style: style.to_owned(), width });
    }

    fn line(&mut self, from: Point, to: Point) {
        self.ops.push(DrawOp::Line { from, to });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) -> Result<(), String> {
        if self.fail_circles {
            return Err("arc failed".to_owned());
        }
        self.ops.push(DrawOp::Circle { center, radius, color: color.to_owned() });
        Ok(())
    }
}
