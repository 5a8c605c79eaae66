mod marquee;
mod status_bar;

pub use marquee::{truncate_with_ellipsis, MarqueeView, MarqueeWidget};
pub use status_bar::StatusBarWidget;
