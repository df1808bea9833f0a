use rand::SeedableRng;
use rand::rngs::StdRng;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wasm_bindgen::JsCast;

use crate::drift::{Bounds, DriftConfig, DriftState};
use crate::render::{self, Surface};
use crate::ticker::{CancelToken, FrameLoop};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What a single [`AnimatorCore::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Positions advanced and the frame was painted.
    Drawn,
    /// Positions advanced but painting failed; the loop carries on.
    Skipped,
    /// The animator was torn down; nothing changed.
    Stopped,
}

/// Animator state and frame logic, independent of the canvas element.
///
/// Separated from [`Animator`] so it can be tested without WASM/browser dependencies.
#[derive(Debug)]
pub struct AnimatorCore {
    pub state: DriftState,
    token: CancelToken,
    frames: u64,
    skipped: u64,
}

impl AnimatorCore {
    #[must_use]
    pub fn new(state: DriftState, token: CancelToken) -> Self {
        Self { state, token, frames: 0, skipped: 0 }
    }

    /// Default ring layout with colors and velocities drawn from `seed`.
    #[must_use]
    pub fn seeded(seed: u64, token: CancelToken) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(DriftState::new(DriftConfig::default(), Bounds::default(), &mut rng), token)
    }

    /// Advance one frame and paint it onto `surface`.
    ///
    /// After teardown this is a no-op that returns [`FrameOutcome::Stopped`].
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> FrameOutcome {
        if !self.token.is_live() {
            return FrameOutcome::Stopped;
        }
        self.state.step();
        self.frames += 1;
        match render::draw_frame(surface, &self.state) {
            Ok(()) => FrameOutcome::Drawn,
            Err(_) => {
                self.skipped += 1;
                FrameOutcome::Skipped
            }
        }
    }

    /// Stop all future ticks.
    pub fn unmount(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.token.is_live()
    }

    /// Frames advanced so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames whose painting failed.
    #[must_use]
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    #[must_use]
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }
}

/// The browser animator: an [`AnimatorCore`] painting into a canvas every
/// display frame. Dropping it stops the loop.
pub struct Animator {
    frame_loop: FrameLoop,
}

impl Animator {
    /// Bind to `canvas` and start animating until `token` is cancelled or the
    /// animator is dropped.
    ///
    /// Returns `None` without starting anything when the canvas has no 2D
    /// context or no frame can be requested.
    #[must_use]
    pub fn mount(canvas: &HtmlCanvasElement, seed: u64, token: CancelToken) -> Option<Self> {
        let Ok(Some(context)) = canvas.get_context("2d") else {
            return None;
        };
        let Ok(mut ctx) = context.dyn_into::<CanvasRenderingContext2d>() else {
            return None;
        };

        let mut core = AnimatorCore::seeded(seed, token.clone());
        let Ok(frame_loop) = FrameLoop::start(token, move || {
            core.tick(&mut ctx);
        }) else {
            return None;
        };
        Some(Self { frame_loop })
    }

    /// [`Animator::mount`] with a seed taken from `Math.random()`.
    #[must_use]
    pub fn mount_random(canvas: &HtmlCanvasElement, token: CancelToken) -> Option<Self> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        Self::mount(canvas, seed, token)
    }

    /// Handle that stops this animator from anywhere, including `Send` contexts.
    #[must_use]
    pub fn token(&self) -> CancelToken {
        self.frame_loop.token()
    }

    /// Stop the loop and release the canvas.
    pub fn unmount(self) {
        drop(self);
    }
}
