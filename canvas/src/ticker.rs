//! Cancellable per-frame ticker driven by `requestAnimationFrame`.
//!
//! [`CancelToken`] is the teardown handle. It is `Send + Sync` so a UI layer
//! can move it into cleanup hooks, and cancelling it both marks the loop dead
//! and cancels the frame that is already queued. [`FrameLoop`] owns the
//! self-rescheduling browser callback and releases it when dropped.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Shared stop switch for a frame loop.
#[derive(Debug, Clone)]
pub struct CancelToken {
    live: Arc<AtomicBool>,
    /// Handle of the queued animation frame, `0` when none is queued.
    pending: Arc<AtomicI32>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)), pending: Arc::new(AtomicI32::new(0)) }
    }

    /// Whether frames should keep running.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Stop the loop. Idempotent.
    pub fn cancel(&self) {
        if !self.live.swap(false, Ordering::AcqRel) {
            return;
        }
        let id = self.pending.swap(0, Ordering::AcqRel);
        if id != 0 {
            cancel_frame(id);
        }
    }

    /// Handle of the currently queued frame, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<i32> {
        match self.pending.load(Ordering::Acquire) {
            0 => None,
            id => Some(id),
        }
    }

    fn set_pending(&self, id: i32) {
        self.pending.store(id, Ordering::Release);
    }

    fn clear_pending(&self) {
        self.pending.store(0, Ordering::Release);
    }
}

#[cfg(target_arch = "wasm32")]
fn cancel_frame(id: i32) {
    if let Some(window) = web_sys::window() {
        // A refused cancel is harmless: the callback re-checks the live flag.
        if let Err(err) = window.cancel_animation_frame(id) {
            web_sys::console::debug_2(&JsValue::from_str("cancelAnimationFrame failed"), &err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn cancel_frame(_id: i32) {}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A running `requestAnimationFrame` loop.
pub struct FrameLoop {
    token: CancelToken,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    /// Call `on_frame` once per display refresh until `token` is cancelled or
    /// the loop is dropped.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no `window` or the first frame cannot be
    /// requested. Nothing is left running in that case.
    pub fn start<F>(token: CancelToken, mut on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let callback_for_frame = Rc::clone(&callback);
        let token_for_frame = token.clone();
        let window_for_frame = window.clone();

        let frame = Closure::wrap(Box::new(move |_ts: f64| {
            token_for_frame.clear_pending();
            if !token_for_frame.is_live() {
                callback_for_frame.borrow_mut().take();
                return;
            }

            on_frame();

            if !token_for_frame.is_live() {
                callback_for_frame.borrow_mut().take();
                return;
            }
            let requested = callback_for_frame
                .borrow()
                .as_ref()
                .map(|cb| window_for_frame.request_animation_frame(cb.as_ref().unchecked_ref()));
            match requested {
                Some(Ok(id)) => token_for_frame.set_pending(id),
                Some(Err(_)) => token_for_frame.cancel(),
                None => {}
            }
        }) as Box<dyn FnMut(f64)>);

        let first = window.request_animation_frame(frame.as_ref().unchecked_ref())?;
        token.set_pending(first);
        *callback.borrow_mut() = Some(frame);

        Ok(Self { token, callback })
    }

    /// The token controlling this loop.
    #[must_use]
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.token.cancel();
        self.callback.borrow_mut().take();
    }
}
