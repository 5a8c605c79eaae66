//! Animation engine for marquees in the terminal
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `config` - Frame pacing derived from `[ui]` configuration
//!
//! ## L3 Molecular Layer
//! - `player` - Executes scheduled linear motions against `Instant`

// L4 Atomic Layer
pub mod config;

// L3 Molecular Layer
pub mod player;

pub use config::AnimationConfigExt;
pub use player::MotionPlayer;
