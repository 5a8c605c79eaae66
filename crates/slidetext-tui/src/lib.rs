pub mod animation;
pub mod app;
pub mod event;
pub mod host;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use host::{new_marquee, Marquee, TerminalHost, TextStyle, Truncation};
pub use theme::{load_theme, Theme};
