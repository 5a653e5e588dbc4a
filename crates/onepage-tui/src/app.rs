use std::sync::Arc;

use ratatui::layout::Rect;
use tracing::debug;

use onepage_core::{AppConfig, Document, Effect, Location, MenuState, Viewport};

use crate::indicator::Indicator;
use crate::input::Action;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

/// Application state: one bound menu instance plus the two shared
/// animation resources (viewport scroll, indicator) and the location
/// strategy.
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Active theme
    pub theme: Theme,
    /// The document being viewed
    pub document: Document,
    /// Menu state machine
    pub menu: MenuState,
    /// Viewport scroll controller
    pub scroll: ScrollAnimator,
    /// Active-item marker, created on first activation
    pub indicator: Option<Indicator>,
    /// Location fragment tracking
    pub location: Location,
    /// Inner rect of the menu pane, updated each draw for hit-testing
    pub menu_area: Rect,
    /// Inner rect of the document pane, updated each draw
    pub doc_area: Rect,
    /// Item currently under the mouse cursor
    pub hovered: Option<usize>,
    /// Pending key for multi-key sequences (e.g. 'gg')
    pub pending_key: Option<char>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, document: Document) -> Self {
        let menu = MenuState::from_sections(document.sections(), config.menu.clone());
        let scroll = ScrollAnimator::new(&config.scroll);
        let location = Location::new(config.menu.use_history);
        Self {
            config,
            theme,
            document,
            menu,
            scroll,
            indicator: None,
            location,
            menu_area: Rect::default(),
            doc_area: Rect::default(),
            hovered: None,
            pending_key: None,
            should_quit: false,
        }
    }

    /// Viewport over the document pane at the current scroll position.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll.current(), self.doc_area.height)
    }

    pub fn max_scroll(&self) -> u16 {
        self.document
            .total_height()
            .saturating_sub(self.doc_area.height)
    }

    /// Whether a frame-rate tick is needed for a running animation.
    pub fn needs_fast_update(&self) -> bool {
        self.scroll.is_animating()
            || self.indicator.as_ref().is_some_and(Indicator::is_animating)
    }

    /// Activation at bind time: mark the in-view item active and place
    /// the indicator without an animated jump. Call once after the first
    /// draw, when the pane sizes are known.
    pub fn init_active(&mut self) {
        let effects = self
            .menu
            .activate_initial(self.document.sections(), self.viewport());
        self.apply_effects(effects);
    }

    /// Per-frame update: advance both animations, observe scroll
    /// completion, then run viewport detection.
    pub fn on_tick(&mut self) {
        if let Some(indicator) = &mut self.indicator {
            indicator.update();
        }
        let max = self.max_scroll();
        self.scroll.update(max);
        if self.scroll.take_completed() {
            debug!(position = self.scroll.current(), "programmatic scroll landed");
        }
        self.run_scroll_detection();
    }

    /// Scroll-driven activation; inert while a programmatic scroll is in
    /// flight.
    pub fn run_scroll_detection(&mut self) {
        let effects = self.menu.handle_scroll_tick(
            self.document.sections(),
            self.viewport(),
            self.scroll.is_animating(),
        );
        self.apply_effects(effects);
    }

    /// Execute the effects a state machine transition asked for.
    pub fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::MoveIndicator { item, animate } => self.move_indicator(item, animate),
                Effect::ScrollToSection { section_id } => self.scroll_to_section(&section_id),
                Effect::PushLocation { fragment } => self.location.update(&fragment),
            }
        }
    }

    fn move_indicator(&mut self, item: usize, animate: bool) {
        let Some(section_id) = self.menu.items().get(item).map(|i| i.section_id.clone()) else {
            return;
        };
        let row = item as u16;
        match &mut self.indicator {
            Some(indicator) => indicator.move_to(row, &section_id, animate),
            None => {
                self.indicator =
                    Some(Indicator::materialize(&self.config.indicator, row, &section_id));
            }
        }
    }

    /// Animate the viewport to a section; a dangling fragment is a no-op.
    fn scroll_to_section(&mut self, section_id: &str) {
        let Some(section) = self.document.section(section_id) else {
            debug!(fragment = %section_id, "scroll target does not resolve, skipping");
            return;
        };
        let top = section.top;
        let max = self.max_scroll();
        self.scroll.scroll_to(top, max);
    }

    /// A click on the menu item at `idx`, as from a mouse event.
    pub fn click_item(&mut self, idx: usize) {
        let was_active = self
            .menu
            .items()
            .get(idx)
            .map(|i| i.is_active())
            .unwrap_or(false);
        let outcome = self.menu.handle_click(idx, true);
        let default_prevented = outcome.default_prevented;
        self.apply_effects(outcome.effects);
        if !default_prevented {
            self.default_navigation(idx, was_active);
        }
    }

    /// The un-prevented default of following a fragment link: record the
    /// fragment and jump straight to the target when no scroll animation
    /// was requested instead.
    fn default_navigation(&mut self, idx: usize, was_active: bool) {
        let Some(section_id) = self.menu.items().get(idx).map(|i| i.section_id.clone()) else {
            return;
        };
        if self.config.menu.update_location {
            self.location.update(&section_id);
        }
        if was_active || !self.config.menu.animate_scroll_on_click {
            if let Some(section) = self.document.section(&section_id) {
                let top = section.top;
                let max = self.max_scroll();
                self.scroll.set(top.min(max));
            }
        }
    }

    /// A click on an inline `#fragment` link in the document body:
    /// identical to clicking the matching menu item.
    pub fn click_fragment(&mut self, fragment: &str) {
        if let Some(idx) = self.menu.item_by_fragment(fragment) {
            self.click_item(idx);
        }
    }

    /// Programmatic activation, the public `select` surface.
    pub fn select(&mut self, idx: usize) {
        let effects = self.menu.select(idx);
        self.apply_effects(effects);
    }

    pub fn next_section(&mut self) {
        let next = self.menu.active_index().map(|i| i + 1).unwrap_or(0);
        if next < self.menu.items().len() {
            self.select(next);
        }
    }

    pub fn prev_section(&mut self) {
        match self.menu.active_index() {
            Some(idx) if idx > 0 => self.select(idx - 1),
            _ => {}
        }
    }

    pub fn history_back(&mut self) {
        let Some(fragment) = self.location.back().map(str::to_string) else {
            return;
        };
        self.navigate_to_fragment(&fragment);
    }

    pub fn history_forward(&mut self) {
        let Some(fragment) = self.location.forward().map(str::to_string) else {
            return;
        };
        self.navigate_to_fragment(&fragment);
    }

    /// Activate and scroll without recording a new history entry.
    fn navigate_to_fragment(&mut self, fragment: &str) {
        if let Some(idx) = self.menu.item_by_fragment(fragment) {
            let effects = self.menu.activate(idx);
            self.apply_effects(effects);
            self.scroll_to_section(fragment);
        }
    }

    /// Mouse movement: hover the menu item under the cursor, if any.
    pub fn on_mouse_moved(&mut self, column: u16, row: u16) {
        if !self.config.menu.hover_enabled {
            return;
        }
        let target = self.menu_item_at(column, row);
        if target == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered.take() {
            self.menu.hover_off(prev);
        }
        if let Some(idx) = target {
            self.menu.hover_on(idx);
        }
        self.hovered = target;
    }

    /// Mouse click: menu items first, then inline document links.
    pub fn on_mouse_down(&mut self, column: u16, row: u16) {
        if let Some(idx) = self.menu_item_at(column, row) {
            self.click_item(idx);
            return;
        }
        if self.config.menu.bind_inline_links {
            if let Some((line, col)) = self.document_pos_at(column, row) {
                if let Some(fragment) = self
                    .document
                    .link_at(line, col)
                    .map(|l| l.fragment.clone())
                {
                    self.click_fragment(&fragment);
                }
            }
        }
    }

    /// Menu item index under a terminal coordinate.
    fn menu_item_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.menu_area;
        if !contains(area, column, row) {
            return None;
        }
        let idx = (row - area.y) as usize;
        (idx < self.menu.items().len()).then_some(idx)
    }

    /// Document (line, column) under a terminal coordinate.
    fn document_pos_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        let area = self.doc_area;
        if !contains(area, column, row) {
            return None;
        }
        let line = self.scroll.current() as usize + (row - area.y) as usize;
        let col = (column - area.x) as usize;
        (line < self.document.lines().len()).then_some((line, col))
    }

    /// Dispatch an input action.
    pub fn apply(&mut self, action: Action) {
        // any action other than PendingG resolves the pending sequence
        self.pending_key = None;

        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll.scroll_by(1, self.max_scroll()),
            Action::ScrollUp => self.scroll.scroll_by(-1, self.max_scroll()),
            Action::ScrollHalfPageDown => {
                let half = (self.doc_area.height / 2).max(1) as i32;
                self.scroll.scroll_by(half, self.max_scroll());
            }
            Action::ScrollHalfPageUp => {
                let half = (self.doc_area.height / 2).max(1) as i32;
                self.scroll.scroll_by(-half, self.max_scroll());
            }
            Action::ScrollPageDown => {
                self.scroll
                    .scroll_by(self.doc_area.height as i32, self.max_scroll());
            }
            Action::ScrollPageUp => {
                self.scroll
                    .scroll_by(-(self.doc_area.height as i32), self.max_scroll());
            }
            Action::JumpToTop => self.scroll.set(0),
            Action::JumpToBottom => self.scroll.set(self.max_scroll()),
            Action::PendingG => self.pending_key = Some('g'),
            Action::NextSection => self.next_section(),
            Action::PrevSection => self.prev_section(),
            Action::SelectSection(idx) => {
                if idx < self.menu.items().len() {
                    self.select(idx);
                }
            }
            Action::HistoryBack => self.history_back(),
            Action::HistoryForward => self.history_forward(),
            Action::Click { column, row } => self.on_mouse_down(column, row),
            Action::MouseMove { column, row } => self.on_mouse_moved(column, row),
            Action::None => {}
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}
