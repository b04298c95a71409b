use crate::domain::TransactionRecord;

/// Growing in-order collection of fetched transactions plus an exhaustion flag
///
/// Pages are appended exactly as received: no reordering, no deduplication.
/// Exhaustion is inferred from the first empty page, after which `has_more`
/// stays false until a later non-empty append (the store itself never
/// produces one once drained).
#[derive(Debug)]
pub struct Accumulator {
    items: Vec<TransactionRecord>,
    has_more: bool,
}

impl Accumulator {
    /// Empty accumulator; more data is assumed until proven otherwise
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            has_more: true,
        }
    }

    /// Append one fetched page, returning whether more pages may be available
    ///
    /// An empty page flips `has_more` to false and leaves `items` untouched;
    /// appending further empty pages is a no-op in effect.
    pub fn append(&mut self, page: Vec<TransactionRecord>) -> bool {
        if page.is_empty() {
            self.has_more = false;
        } else {
            self.has_more = true;
            self.items.extend(page);
        }
        self.has_more
    }

    /// Accumulated records, in retrieval order
    pub fn items(&self) -> &[TransactionRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the last appended page left room for more
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Consume the accumulator, keeping the ordered records
    pub fn into_items(self) -> Vec<TransactionRecord> {
        self.items
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}
