//! Seam between the marquee core and the host UI toolkit
//!
//! The host provides text measurement and an animation engine that executes
//! linear motions against its own clock. The core never polls frames; it
//! only schedules and cancels.

use super::content::{Instance, Label};
use super::timing::Motion;

/// Primitives a UI toolkit must supply to drive a [`SlidingLabel`](super::SlidingLabel)
pub trait MarqueeHost<S> {
    /// Natural width of `label` laid out on one line with unconstrained width.
    /// Degenerate results (zero, NaN) are treated as "fits".
    fn measure(&self, label: &Label<S>) -> f64;

    /// Hold `instance` at a fixed horizontal offset without animating
    fn set_offset(&mut self, instance: Instance, offset: f64);

    /// Schedule `motion` on `instance`, anchored at the host's current time
    fn animate(&mut self, instance: Instance, motion: Motion);

    /// Drop every animation on `instance` and reset its offset to zero
    fn cancel_animations(&mut self, instance: Instance);
}
