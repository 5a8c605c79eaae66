//! Seamless marquee for single-line labels
//!
//! A label wider than its container scrolls forever with no visible seam.
//! The primary label slides out once; two copies, staggered in time, carry
//! the endless loop.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `timing` - Closed-form loop timing and linear motions
//! - `content` - Label content model and snapshots
//! - `copies` - Duplication manager for the two copies
//!
//! ## L3 Molecular Layer
//! - `lifecycle` - Idle/Sliding controller driving a [`MarqueeHost`]
//!
//! # Usage
//!
//! ```ignore
//! use slidetext_core::marquee::{Label, SlidingLabel, StartOptions};
//!
//! let mut marquee = SlidingLabel::new(Label::plain("a long headline"), host, 30.0)?;
//! marquee.start(StartOptions::default());
//!
//! // In the host loop, after layout has sized the container:
//! marquee.set_display_width(width);
//! marquee.poll();
//! ```

// L4 Atomic Layer
pub mod content;
pub mod copies;
pub mod timing;

// Seams
pub mod host;
pub mod signal;

// L3 Molecular Layer
pub mod lifecycle;

pub use content::{Instance, Label};
pub use copies::{COPY_COUNT, CopySet};
pub use host::MarqueeHost;
pub use lifecycle::{
    DEFAULT_DELAY, DEFAULT_SPACING, DEFAULT_VELOCITY, SlideState, SlidingLabel, StartOptions,
};
pub use signal::{ResumeSignal, Subscription};
pub use timing::{Motion, SlideDecline, SlideParams, SlideSchedule, SlideTiming};
