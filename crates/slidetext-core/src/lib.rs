pub mod config;
pub mod error;
pub mod marquee;

pub use config::{AppConfig, MarqueeConfig};
pub use error::{Error, Result};
pub use marquee::{
    Label, MarqueeHost, ResumeSignal, SlideParams, SlideSchedule, SlideTiming, SlidingLabel,
    StartOptions,
};
