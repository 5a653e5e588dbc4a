//! Location fragment tracking.
//!
//! Activation can record the current section as a location fragment. Two
//! strategies sit behind one interface: history mode pushes an entry that
//! back/forward can traverse (the pushState analogue), and plain mode
//! overwrites the current fragment in place (the direct hash assignment
//! fallback).

#[derive(Debug, Clone, Default)]
pub struct Location {
    history: Vec<String>,
    /// 1-indexed position in `history`; 0 means empty
    position: usize,
    current: Option<String>,
    use_history: bool,
}

impl Location {
    pub fn new(use_history: bool) -> Self {
        Self {
            use_history,
            ..Default::default()
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Record a fragment via whichever strategy is available.
    pub fn update(&mut self, fragment: &str) {
        if self.use_history {
            self.push(fragment);
        } else {
            self.assign(fragment);
        }
    }

    /// Push a history entry, truncating any forward entries first.
    /// Consecutive duplicates collapse into one entry.
    fn push(&mut self, fragment: &str) {
        if self.position < self.history.len() {
            self.history.truncate(self.position);
        }
        if self.history.last().map(String::as_str) != Some(fragment) {
            self.history.push(fragment.to_string());
        }
        self.position = self.history.len();
        self.current = Some(fragment.to_string());
    }

    /// Overwrite the current fragment without touching history.
    fn assign(&mut self, fragment: &str) {
        self.current = Some(fragment.to_string());
    }

    /// Step back through recorded fragments.
    pub fn back(&mut self) -> Option<&str> {
        if self.position > 1 {
            self.position -= 1;
            let fragment = self.history.get(self.position - 1)?;
            self.current = Some(fragment.clone());
            self.current()
        } else {
            None
        }
    }

    /// Step forward after going back.
    pub fn forward(&mut self) -> Option<&str> {
        if self.position < self.history.len() {
            self.position += 1;
            let fragment = self.history.get(self.position - 1)?;
            self.current = Some(fragment.clone());
            self.current()
        } else {
            None
        }
    }
}
