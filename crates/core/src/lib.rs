pub mod color;
pub mod countdown;
pub mod error;
pub mod event;
pub mod split;
pub mod state;

pub use color::Color;
pub use countdown::{remaining_until, Countdown};
pub use error::{CountdownError, Result};
pub use event::{Listener, Step};
pub use split::{format_time, split};
pub use state::{CountdownState, TimeParts, Units};
