//! Smooth scrolling for the document pane.
//!
//! - `easing` - pure easing curves
//! - `tween` - a single cancellable animation over a row offset, shared
//!   with the indicator animator
//! - `animation` - the scroll controller driving the viewport

pub mod animation;
pub mod easing;
pub mod tween;

pub use animation::ScrollAnimator;
pub use easing::EasingExt;
pub use tween::Tween;
