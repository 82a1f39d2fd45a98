use crate::patch::ConfigEdit;
use crate::presets;
use headerlab_types::HeaderConfig;

/// Linear undo/redo history of header configurations.
///
/// `entries[cursor]` is the current configuration. Applying an edit after an undo discards the
/// redo branch.
#[derive(Clone, Debug)]
pub struct ConfigHistory {
    entries: Vec<HeaderConfig>,
    cursor: usize,
    capacity: Option<usize>,
}

impl ConfigHistory {
    pub fn new(initial: HeaderConfig) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
            capacity: None,
        }
    }

    /// Keep at most `limit` configurations (minimum 1); the oldest are dropped first.
    pub fn with_capacity_limit(initial: HeaderConfig, limit: usize) -> Self {
        Self {
            capacity: Some(limit.max(1)),
            ..Self::new(initial)
        }
    }

    pub fn current(&self) -> &HeaderConfig {
        &self.entries[self.cursor]
    }

    /// Apply an edit to the current configuration and make the result current.
    pub fn apply(&mut self, edit: &ConfigEdit) -> &HeaderConfig {
        let next = edit.apply(self.current());
        self.entries.truncate(self.cursor + 1);
        self.entries.push(next);

        if let Some(limit) = self.capacity
            && self.entries.len() > limit
        {
            let excess = self.entries.len() - limit;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;

        tracing::debug!(cursor = self.cursor, len = self.entries.len(), "config edit applied");
        self.current()
    }

    /// Step back one edit. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        tracing::debug!(cursor = self.cursor, "undo");
        true
    }

    /// Step forward one edit. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        tracing::debug!(cursor = self.cursor, "redo");
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of stored configurations, including the current one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ConfigHistory {
    fn default() -> Self {
        Self::new(presets::initial_config())
    }
}
