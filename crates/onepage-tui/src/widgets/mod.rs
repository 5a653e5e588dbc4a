pub mod document;
pub mod menu;
pub mod status_bar;

pub use document::DocumentWidget;
pub use menu::MenuWidget;
pub use status_bar::StatusBarWidget;
