//! The menu state machine.
//!
//! Transitions mutate item state, announce lifecycle hooks, and return
//! [`Effect`]s describing the animations and location updates the caller
//! should perform. Keeping the side effects out of the machine leaves
//! every transition a plain function over state.
//!
//! All failure modes here are silent no-ops: an index out of range, a
//! fragment with no matching item, or a redundant transition simply does
//! nothing.

use std::sync::Arc;

use tracing::debug;

use super::hooks::{HookKind, HookObserver, HookRegistry, Phase};
use crate::config::MenuConfig;
use crate::document::Section;
use crate::viewport::{find_active_section, Viewport};

/// One navigable entry, bound to a section by its fragment.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub section_id: String,
    pub label: String,
    active: bool,
    hovered: bool,
}

impl MenuItem {
    pub fn new(section_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            label: label.into(),
            active: false,
            hovered: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

/// Work the caller must carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Align the indicator with the given item
    MoveIndicator { item: usize, animate: bool },
    /// Animate the viewport to the section's position
    ScrollToSection { section_id: String },
    /// Record the fragment in the location strategy
    PushLocation { fragment: String },
}

/// Result of a click transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    pub effects: Vec<Effect>,
    /// The triggering event's default navigation must be suppressed
    pub default_prevented: bool,
}

impl ClickOutcome {
    fn none() -> Self {
        Self {
            effects: Vec::new(),
            default_prevented: false,
        }
    }
}

/// State for one bound menu instance.
pub struct MenuState {
    items: Vec<MenuItem>,
    config: MenuConfig,
    hooks: HookRegistry,
}

impl MenuState {
    pub fn new(items: Vec<MenuItem>, config: MenuConfig) -> Self {
        Self {
            items,
            config,
            hooks: HookRegistry::new(),
        }
    }

    /// Build one item per section, in document order.
    pub fn from_sections(sections: &[Section], config: MenuConfig) -> Self {
        let items = sections
            .iter()
            .map(|s| MenuItem::new(s.id.clone(), s.title.clone()))
            .collect();
        Self::new(items, config)
    }

    pub fn subscribe(&mut self, observer: Arc<dyn HookObserver>) {
        self.hooks.subscribe(observer);
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|i| i.active)
    }

    /// Item bound to the given fragment (leading `#` accepted).
    pub fn item_by_fragment(&self, fragment: &str) -> Option<usize> {
        let id = fragment.strip_prefix('#').unwrap_or(fragment);
        self.items.iter().position(|i| i.section_id == id)
    }

    /// Make `idx` the single active item. No-op (no hooks, no effects)
    /// when it already is.
    pub fn activate(&mut self, idx: usize) -> Vec<Effect> {
        self.activate_with(idx, None)
    }

    /// Like [`activate`](Self::activate), with an extra effect delivered
    /// only when the activation actually happens. This is the completion
    /// slot the scroll-tick path uses for location updates.
    pub fn activate_with(&mut self, idx: usize, completion: Option<Effect>) -> Vec<Effect> {
        let Some(item) = self.items.get(idx) else {
            return Vec::new();
        };
        if item.active {
            return Vec::new();
        }
        let id = item.section_id.clone();
        debug!(section = %id, "activating menu item");

        self.hooks.emit(HookKind::Active, Phase::Before, &id);
        for other in &mut self.items {
            other.active = false;
        }
        self.items[idx].active = true;

        let mut effects = Vec::new();
        if self.config.animate_indicator {
            effects.push(Effect::MoveIndicator { item: idx, animate: true });
        }
        if let Some(extra) = completion {
            effects.push(extra);
        }
        self.hooks.emit(HookKind::Active, Phase::After, &id);
        effects
    }

    /// Set the hover flag. Idempotent: already-hovering items emit no
    /// hooks. Hover is orthogonal to active.
    pub fn hover_on(&mut self, idx: usize) {
        if !self.config.hover_enabled {
            return;
        }
        let Some(item) = self.items.get(idx) else {
            return;
        };
        if item.hovered {
            return;
        }
        let id = item.section_id.clone();
        self.hooks.emit(HookKind::HoverOn, Phase::Before, &id);
        self.items[idx].hovered = true;
        self.hooks.emit(HookKind::HoverOn, Phase::After, &id);
    }

    /// Clear the hover flag, with the same idempotence guard.
    pub fn hover_off(&mut self, idx: usize) {
        if !self.config.hover_enabled {
            return;
        }
        let Some(item) = self.items.get(idx) else {
            return;
        };
        if !item.hovered {
            return;
        }
        let id = item.section_id.clone();
        self.hooks.emit(HookKind::HoverOff, Phase::Before, &id);
        self.items[idx].hovered = false;
        self.hooks.emit(HookKind::HoverOff, Phase::After, &id);
    }

    /// A click on a menu item (or on an inline link bound to it).
    ///
    /// Non-active items activate first, then scroll. The event's default
    /// navigation is allowed only when location updates are enabled;
    /// clicking the already-active item otherwise suppresses it to avoid
    /// a redundant jump. Click hooks fire on every branch.
    pub fn handle_click(&mut self, idx: usize, has_event: bool) -> ClickOutcome {
        let Some(item) = self.items.get(idx) else {
            return ClickOutcome::none();
        };
        let id = item.section_id.clone();
        self.hooks.emit(HookKind::Click, Phase::Before, &id);

        let mut effects = Vec::new();
        let mut default_prevented = false;
        if !self.items[idx].active {
            effects.extend(self.activate(idx));
            if self.config.animate_scroll_on_click {
                if !self.config.update_location && has_event {
                    default_prevented = true;
                }
                effects.push(Effect::ScrollToSection {
                    section_id: id.clone(),
                });
            }
        } else if !self.config.update_location && has_event {
            default_prevented = true;
        }

        self.hooks.emit(HookKind::Click, Phase::After, &id);
        ClickOutcome {
            effects,
            default_prevented,
        }
    }

    /// Programmatic activation: the click flow without an event object.
    /// Short-circuits when the item is already active.
    pub fn select(&mut self, idx: usize) -> Vec<Effect> {
        let Some(item) = self.items.get(idx) else {
            return Vec::new();
        };
        if item.active {
            return Vec::new();
        }
        let id = item.section_id.clone();
        let mut effects = self.activate(idx);
        if self.config.animate_scroll_on_click {
            effects.push(Effect::ScrollToSection { section_id: id });
        }
        effects
    }

    /// Scroll-driven activation. Skipped entirely while a programmatic
    /// scroll is in flight, so the animation cannot feed back into the
    /// detector. When location updates are enabled, the activation
    /// carries a location push as its completion effect.
    pub fn handle_scroll_tick(
        &mut self,
        sections: &[Section],
        view: Viewport,
        scroll_in_flight: bool,
    ) -> Vec<Effect> {
        if scroll_in_flight {
            return Vec::new();
        }
        let Some(section) =
            find_active_section(sections, view, self.config.viewport_threshold)
        else {
            return Vec::new();
        };
        let Some(idx) = self.item_by_fragment(&section.id) else {
            return Vec::new();
        };
        let completion = if self.config.update_location {
            Some(Effect::PushLocation {
                fragment: section.id.clone(),
            })
        } else {
            None
        };
        self.activate_with(idx, completion)
    }

    /// Activation at bind time: mark the in-view item active and ask for
    /// the indicator to be materialized in place, without an animated
    /// jump.
    pub fn activate_initial(&mut self, sections: &[Section], view: Viewport) -> Vec<Effect> {
        let Some(section) =
            find_active_section(sections, view, self.config.viewport_threshold)
        else {
            return Vec::new();
        };
        let Some(idx) = self.item_by_fragment(&section.id) else {
            return Vec::new();
        };
        let id = section.id.clone();

        self.hooks.emit(HookKind::Active, Phase::Before, &id);
        self.items[idx].active = true;
        let mut effects = Vec::new();
        if self.config.animate_indicator {
            effects.push(Effect::MoveIndicator {
                item: idx,
                animate: false,
            });
        }
        self.hooks.emit(HookKind::Active, Phase::After, &id);
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::super::hooks::testing::HookRecorder;
    use super::*;
    use crate::document::Section;

    fn section(id: &str, top: u16, height: u16) -> Section {
        Section {
            id: id.to_string(),
            title: id.to_string(),
            top,
            height,
        }
    }

    fn sections() -> Vec<Section> {
        vec![
            section("hello", 0, 20),
            section("works", 20, 20),
            section("contact", 40, 20),
        ]
    }

    fn menu(config: MenuConfig) -> MenuState {
        MenuState::from_sections(&sections(), config)
    }

    fn assert_single_active(state: &MenuState) {
        assert!(state.items().iter().filter(|i| i.is_active()).count() <= 1);
    }

    #[test]
    fn test_at_most_one_active() {
        let mut state = menu(MenuConfig::default());
        assert_single_active(&state);
        state.activate(0);
        assert_single_active(&state);
        state.activate(2);
        assert_single_active(&state);
        assert_eq!(state.active_index(), Some(2));
        assert!(!state.items()[0].is_active());
    }

    #[test]
    fn test_activate_idempotent() {
        let mut state = menu(MenuConfig::default());
        let recorder = Arc::new(HookRecorder::default());
        state.subscribe(recorder.clone());

        let first = state.activate(1);
        assert!(!first.is_empty());
        let second = state.activate(1);
        assert!(second.is_empty());
        assert_eq!(recorder.count(HookKind::Active, Phase::Before), 1);
        assert_eq!(recorder.count(HookKind::Active, Phase::After), 1);
    }

    #[test]
    fn test_activate_out_of_range_is_noop() {
        let mut state = menu(MenuConfig::default());
        assert!(state.activate(99).is_empty());
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn test_activate_emits_indicator_effect_when_configured() {
        let mut state = menu(MenuConfig::default());
        let effects = state.activate(1);
        assert_eq!(
            effects,
            vec![Effect::MoveIndicator {
                item: 1,
                animate: true
            }]
        );

        let mut plain = menu(MenuConfig {
            animate_indicator: false,
            ..Default::default()
        });
        assert!(plain.activate(1).is_empty());
        assert_eq!(plain.active_index(), Some(1));
    }

    #[test]
    fn test_hover_on_twice_emits_once() {
        let mut state = menu(MenuConfig::default());
        let recorder = Arc::new(HookRecorder::default());
        state.subscribe(recorder.clone());

        state.hover_on(0);
        state.hover_on(0);
        assert!(state.items()[0].is_hovered());
        assert_eq!(recorder.count(HookKind::HoverOn, Phase::Before), 1);
        assert_eq!(recorder.count(HookKind::HoverOn, Phase::After), 1);

        state.hover_off(0);
        state.hover_off(0);
        assert!(!state.items()[0].is_hovered());
        assert_eq!(recorder.count(HookKind::HoverOff, Phase::Before), 1);
    }

    #[test]
    fn test_hover_orthogonal_to_active() {
        let mut state = menu(MenuConfig::default());
        state.activate(1);
        state.hover_on(0);
        assert_eq!(state.active_index(), Some(1));
        assert!(state.items()[0].is_hovered());
        assert!(!state.items()[0].is_active());
    }

    #[test]
    fn test_hover_disabled_is_inert() {
        let mut state = menu(MenuConfig {
            hover_enabled: false,
            ..Default::default()
        });
        let recorder = Arc::new(HookRecorder::default());
        state.subscribe(recorder.clone());
        state.hover_on(0);
        assert!(!state.items()[0].is_hovered());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_click_activates_then_scrolls() {
        // Scenario: click `contact` while `hello` is active, hash off
        let mut state = menu(MenuConfig::default());
        state.activate(0);

        let outcome = state.handle_click(2, true);
        assert_eq!(state.active_index(), Some(2));
        assert!(!state.items()[0].is_active());
        assert!(outcome.default_prevented);
        // activation's indicator move precedes the scroll request
        assert_eq!(
            outcome.effects,
            vec![
                Effect::MoveIndicator {
                    item: 2,
                    animate: true
                },
                Effect::ScrollToSection {
                    section_id: "contact".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_click_active_item_suppresses_default() {
        let mut state = menu(MenuConfig::default());
        state.activate(1);
        let outcome = state.handle_click(1, true);
        assert!(outcome.effects.is_empty());
        assert!(outcome.default_prevented);
    }

    #[test]
    fn test_click_allows_default_in_hash_mode() {
        let mut state = menu(MenuConfig {
            update_location: true,
            ..Default::default()
        });
        state.activate(1);
        assert!(!state.handle_click(1, true).default_prevented);
        assert!(!state.handle_click(2, true).default_prevented);
    }

    #[test]
    fn test_click_hooks_fire_on_both_branches() {
        let mut state = menu(MenuConfig::default());
        let recorder = Arc::new(HookRecorder::default());
        state.subscribe(recorder.clone());

        state.handle_click(1, true);
        state.handle_click(1, true);
        assert_eq!(recorder.count(HookKind::Click, Phase::Before), 2);
        assert_eq!(recorder.count(HookKind::Click, Phase::After), 2);
        // only the first click activated anything
        assert_eq!(recorder.count(HookKind::Active, Phase::Before), 1);
    }

    #[test]
    fn test_click_without_scroll_animation() {
        let mut state = menu(MenuConfig {
            animate_scroll_on_click: false,
            ..Default::default()
        });
        let outcome = state.handle_click(1, true);
        assert_eq!(state.active_index(), Some(1));
        assert!(!outcome.default_prevented);
        assert!(!outcome
            .effects
            .iter()
            .any(|e| matches!(e, Effect::ScrollToSection { .. })));
    }

    #[test]
    fn test_scroll_tick_activates_section_in_view() {
        let mut state = menu(MenuConfig::default());
        let view = Viewport::new(20, 20); // exactly `works`
        let effects = state.handle_scroll_tick(&sections(), view, false);
        assert_eq!(state.active_index(), Some(1));
        assert_eq!(
            effects,
            vec![Effect::MoveIndicator {
                item: 1,
                animate: true
            }]
        );
    }

    #[test]
    fn test_scroll_tick_pushes_location_in_hash_mode() {
        let mut state = menu(MenuConfig {
            update_location: true,
            ..Default::default()
        });
        let effects = state.handle_scroll_tick(&sections(), Viewport::new(20, 20), false);
        assert!(effects.contains(&Effect::PushLocation {
            fragment: "works".to_string()
        }));
    }

    #[test]
    fn test_scroll_tick_suppressed_while_scroll_in_flight() {
        // Scenario: programmatic scroll is animating, a tick arrives
        let mut state = menu(MenuConfig::default());
        state.activate(0);
        let recorder = Arc::new(HookRecorder::default());
        state.subscribe(recorder.clone());

        let effects = state.handle_scroll_tick(&sections(), Viewport::new(40, 20), true);
        assert!(effects.is_empty());
        assert_eq!(state.active_index(), Some(0));
        assert!(recorder.events().is_empty());

        // same tick once the animation has landed
        let effects = state.handle_scroll_tick(&sections(), Viewport::new(40, 20), false);
        assert!(!effects.is_empty());
        assert_eq!(state.active_index(), Some(2));
    }

    #[test]
    fn test_scroll_tick_noop_when_already_active() {
        let mut state = menu(MenuConfig::default());
        state.activate(1);
        let recorder = Arc::new(HookRecorder::default());
        state.subscribe(recorder.clone());

        let effects = state.handle_scroll_tick(&sections(), Viewport::new(20, 20), false);
        assert!(effects.is_empty());
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_scroll_tick_none_in_view() {
        let mut state = MenuState::from_sections(
            &[section("hello", 50, 20)],
            MenuConfig::default(),
        );
        let effects = state.handle_scroll_tick(
            &[section("hello", 50, 20)],
            Viewport::new(0, 10),
            false,
        );
        assert!(effects.is_empty());
        assert_eq!(state.active_index(), None);
    }

    #[test]
    fn test_select_matches_click_effects() {
        let mut clicked = menu(MenuConfig::default());
        let mut selected = menu(MenuConfig::default());

        let outcome = clicked.handle_click(2, true);
        let effects = selected.select(2);
        assert_eq!(outcome.effects, effects);
        assert_eq!(clicked.active_index(), selected.active_index());

        // short-circuit when already active
        assert!(selected.select(2).is_empty());
    }

    #[test]
    fn test_activate_initial_materializes_indicator_in_place() {
        let mut state = menu(MenuConfig::default());
        let recorder = Arc::new(HookRecorder::default());
        state.subscribe(recorder.clone());

        let effects = state.activate_initial(&sections(), Viewport::new(20, 20));
        assert_eq!(state.active_index(), Some(1));
        assert_eq!(
            effects,
            vec![Effect::MoveIndicator {
                item: 1,
                animate: false
            }]
        );
        assert_eq!(recorder.count(HookKind::Active, Phase::Before), 1);
        assert_eq!(recorder.count(HookKind::Active, Phase::After), 1);
    }

    #[test]
    fn test_item_by_fragment_accepts_hash_prefix() {
        let state = menu(MenuConfig::default());
        assert_eq!(state.item_by_fragment("#works"), Some(1));
        assert_eq!(state.item_by_fragment("works"), Some(1));
        assert_eq!(state.item_by_fragment("#missing"), None);
    }
}
