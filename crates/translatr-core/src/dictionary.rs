use translatr_types::WordPair;

/// Client-side state of the dictionary management view.
///
/// Holds the word list snapshot fetched at startup plus the active filter
/// query. Filtering is purely local and never re-queries the service; rows
/// are addressed by their position in the filtered (visible) list, the way
/// they are rendered.
#[derive(Debug, Default)]
pub struct DictionaryView {
    words: Vec<WordPair>,
    query: String,
}

impl DictionaryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot, keeping the active filter.
    pub fn set_snapshot(&mut self, words: Vec<WordPair>) {
        self.words = words;
    }

    /// Set the filter query. An empty query restores the full snapshot.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn snapshot_len(&self) -> usize {
        self.words.len()
    }

    /// Rows matching the filter: the lower-cased query must appear as a
    /// substring of the lower-cased source or target term.
    pub fn visible(&self) -> Vec<&WordPair> {
        self.visible_indices()
            .into_iter()
            .map(|i| &self.words[i])
            .collect()
    }

    fn visible_indices(&self) -> Vec<usize> {
        if self.query.is_empty() {
            return (0..self.words.len()).collect();
        }
        let needle = self.query.to_lowercase();
        self.words
            .iter()
            .enumerate()
            .filter(|(_, w)| {
                w.source.to_lowercase().contains(&needle)
                    || w.target.to_lowercase().contains(&needle)
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// The visible row at `row`, if any.
    pub fn entry(&self, row: usize) -> Option<&WordPair> {
        let index = *self.visible_indices().get(row)?;
        self.words.get(index)
    }

    /// Append a freshly created pair to the snapshot.
    pub fn push(&mut self, pair: WordPair) {
        self.words.push(pair);
    }

    /// Overwrite both terms of every snapshot row with the given id.
    pub fn edit_by_id(&mut self, id: i64, source: &str, target: &str) {
        for word in self.words.iter_mut().filter(|w| w.id == Some(id)) {
            word.source = source.to_string();
            word.target = target.to_string();
        }
    }

    /// Overwrite the visible row at `row` locally, without a service call.
    /// Returns false when the row does not exist.
    pub fn edit_local(&mut self, row: usize, source: &str, target: &str) -> bool {
        let Some(&index) = self.visible_indices().get(row) else {
            return false;
        };
        let word = &mut self.words[index];
        word.source = source.to_string();
        word.target = target.to_string();
        true
    }

    /// Drop every snapshot row with the given id.
    pub fn remove_by_id(&mut self, id: i64) {
        self.words.retain(|w| w.id != Some(id));
    }

    /// Drop the visible row at `row` locally. Returns false when the row
    /// does not exist.
    pub fn remove_local(&mut self, row: usize) -> bool {
        let Some(&index) = self.visible_indices().get(row) else {
            return false;
        };
        self.words.remove(index);
        true
    }
}
