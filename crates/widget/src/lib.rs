pub mod countdown;
pub mod view;

pub use countdown::CountdownWidget;
pub use view::CountdownView;
