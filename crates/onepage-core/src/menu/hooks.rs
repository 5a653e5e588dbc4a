//! Lifecycle hooks.
//!
//! Every transition of the menu state machine is announced to registered
//! observers as a (kind, phase) pair. One dispatch path serves both the
//! "callback" and "event" styles of consumption.

use std::sync::{Arc, Weak};

/// Which transition is being announced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    HoverOn,
    HoverOff,
    Click,
    Active,
}

/// Whether the transition is about to happen or just happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Before,
    After,
}

#[derive(Debug, Clone)]
pub struct HookEvent {
    pub kind: HookKind,
    pub phase: Phase,
    /// Section id of the affected menu item
    pub section_id: String,
}

pub trait HookObserver: Send + Sync {
    fn on_hook(&self, event: &HookEvent);
}

/// Observer registry held by each menu instance. Observers are stored
/// weakly so dropping one unsubscribes it.
#[derive(Default)]
pub(crate) struct HookRegistry {
    observers: Vec<Weak<dyn HookObserver>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Arc<dyn HookObserver>) {
        self.observers.push(Arc::downgrade(&observer));
    }

    pub fn emit(&mut self, kind: HookKind, phase: Phase, section_id: &str) {
        self.observers.retain(|weak| weak.strong_count() > 0);
        if self.observers.is_empty() {
            return;
        }
        let event = HookEvent {
            kind,
            phase,
            section_id: section_id.to_string(),
        };
        for weak in &self.observers {
            if let Some(observer) = weak.upgrade() {
                observer.on_hook(&event);
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every hook it sees; shared by the state machine tests.
    #[derive(Default)]
    pub struct HookRecorder {
        events: Mutex<Vec<(HookKind, Phase, String)>>,
    }

    impl HookRecorder {
        pub fn events(&self) -> Vec<(HookKind, Phase, String)> {
            self.events.lock().unwrap().clone()
        }

        pub fn count(&self, kind: HookKind, phase: Phase) -> usize {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter(|(k, p, _)| *k == kind && *p == phase)
                .count()
        }
    }

    impl HookObserver for HookRecorder {
        fn on_hook(&self, event: &HookEvent) {
            self.events.lock().unwrap().push((
                event.kind,
                event.phase,
                event.section_id.clone(),
            ));
        }
    }
}
