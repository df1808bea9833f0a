//! Drifting-graph animator for the dashboard's knowledge-graph preview.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns a
//! small set of drifting nodes, moves them every display frame, bounces them
//! off the surface margins and paints them with their proximity edges onto a
//! 2D canvas. The host UI only mounts an [`engine::Animator`] on a canvas
//! element and drops it on teardown.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser [`engine::Animator`] and testable [`engine::AnimatorCore`] |
//! | [`drift`] | Node set, bounds and the pure per-frame [`drift::advance`] |
//! | [`render`] | [`render::Surface`] seam and frame painting |
//! | [`ticker`] | `requestAnimationFrame` loop and its [`ticker::CancelToken`] |
//! | [`consts`] | Surface size, layout and style constants |

pub mod consts;
pub mod drift;
pub mod engine;
pub mod render;
pub mod ticker;

#[cfg(test)]
mod test_support;
