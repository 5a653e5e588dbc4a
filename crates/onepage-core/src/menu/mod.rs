//! Menu instance state: items, the activation state machine, and the
//! hook/observer mechanism that surfaces its lifecycle transitions.

mod hooks;
mod state;

pub use hooks::{HookEvent, HookKind, HookObserver, Phase};
pub use state::{ClickOutcome, Effect, MenuItem, MenuState};
