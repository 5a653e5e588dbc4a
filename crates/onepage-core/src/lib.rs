pub mod config;
pub mod document;
pub mod error;
pub mod location;
pub mod menu;
pub mod viewport;

pub use config::{AppConfig, EasingType, IndicatorConfig, MenuConfig, ScrollConfig};
pub use document::{Document, Section};
pub use error::{Error, Result};
pub use location::Location;
pub use menu::{ClickOutcome, Effect, HookEvent, HookKind, HookObserver, MenuItem, MenuState, Phase};
pub use viewport::Viewport;
