use crate::shell::content::{Content, ContentKind, HistoryContent};
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

/// Maximum number of history entries kept; older ones are dropped.
pub const HISTORY_LIMIT: usize = 50;

/// Fresh identifier for a favorite or history entry. Never reused.
pub fn new_item_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteItem {
    pub id: String,
    pub content: Content,
    pub timestamp: u64,
}

impl FavoriteItem {
    /// Stamp `content` with a new id and the current time.
    pub fn new(content: Content) -> Self {
        Self {
            id: new_item_id(),
            content,
            timestamp: now_millis(),
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.content.kind()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem {
    pub id: String,
    pub content: HistoryContent,
    pub timestamp: u64,
}

impl HistoryItem {
    pub fn new(content: HistoryContent) -> Self {
        Self {
            id: new_item_id(),
            content,
            timestamp: now_millis(),
        }
    }

    pub fn kind(&self) -> ContentKind {
        self.content.kind()
    }
}

/// Saved content, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Favorites {
    items: VecDeque<FavoriteItem>,
}

impl Favorites {
    /// Prepend `item`. Returns `false` (and changes nothing) if an entry
    /// with the same id is already present.
    pub fn add(&mut self, item: FavoriteItem) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push_front(item);
        true
    }

    /// Remove the entry with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(index) => self.items.remove(index).is_some(),
            None => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&FavoriteItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Recently shown content, newest first, bounded to [`HISTORY_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct History {
    items: VecDeque<HistoryItem>,
}

impl History {
    pub fn push(&mut self, item: HistoryItem) {
        self.items.push_front(item);
        self.items.truncate(HISTORY_LIMIT);
    }

    pub fn get(&self, index: usize) -> Option<&HistoryItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
