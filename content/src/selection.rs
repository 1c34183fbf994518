//! Single-selection state shared by the gallery, map, FAQ and itinerary.
//!
//! At most one key is selected at a time. Selecting the current key again
//! clears it, selecting any other key replaces it.

/// An optional selected key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K> {
    current: Option<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<K: PartialEq> Selection<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection that starts with `key` open.
    pub fn open(key: K) -> Self {
        Self { current: Some(key) }
    }

    /// Toggle `key`: clears it when already selected, selects it otherwise.
    pub fn select(&mut self, key: K) {
        if self.current.as_ref() == Some(&key) {
            self.current = None;
        } else {
            self.current = Some(key);
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.current.as_ref() == Some(key)
    }

    pub fn is_none(&self) -> bool {
        self.current.is_none()
    }
}

impl Selection<usize> {
    /// Like [`Selection::select`], ignoring indices outside `0..len`.
    pub fn select_within(&mut self, index: usize, len: usize) {
        if index < len {
            self.select(index);
        } else {
            tracing::debug!(index, len, "ignoring out of range selection");
        }
    }
}

/// Which gallery item, if any, is shown full size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lightbox {
    selection: Selection<usize>,
    len: usize,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self {
            selection: Selection::new(),
            len,
        }
    }

    pub fn open(&mut self, index: usize) {
        self.selection.select_within(index, self.len);
    }

    pub fn close(&mut self) {
        self.selection.clear();
    }

    pub fn current(&self) -> Option<usize> {
        self.selection.current().copied()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the following item, wrapping from the last to the first.
    /// Does nothing while closed.
    pub fn next(&mut self) {
        if let Some(index) = self.current() {
            self.selection = Selection::open((index + 1) % self.len);
        }
    }

    /// Move to the preceding item, wrapping from the first to the last.
    /// Does nothing while closed.
    pub fn previous(&mut self) {
        if let Some(index) = self.current() {
            let prev = if index == 0 { self.len - 1 } else { index - 1 };
            self.selection = Selection::open(prev);
        }
    }
}
