/// Detail panel selection
///
/// Every click bumps a token. Metadata responses carry the token they
/// were requested with, and anything that no longer matches is dropped,
/// so a slow response for an earlier click can never replace the
/// metadata of the icon currently on screen.
use super::data::{IndexItem, MetadataData};

pub const DEFAULT_SIZE: u32 = 24;
pub const DEFAULT_STYLE: &str = "Regular";

/// Identifies one selection; strictly increasing per click
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SelectionToken(u64);

#[derive(Debug, Clone)]
pub struct Selection {
    icon: Option<IndexItem>,
    metadata: Option<MetadataData>,
    current_size: u32,
    current_style: String,
    token: SelectionToken,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            icon: None,
            metadata: None,
            current_size: DEFAULT_SIZE,
            current_style: DEFAULT_STYLE.to_string(),
            token: SelectionToken::default(),
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(&self) -> Option<&IndexItem> {
        self.icon.as_ref()
    }

    pub fn metadata(&self) -> Option<&MetadataData> {
        self.metadata.as_ref()
    }

    pub fn current_size(&self) -> u32 {
        self.current_size
    }

    pub fn current_style(&self) -> &str {
        &self.current_style
    }

    /// Select an icon. Previous metadata is cleared right away so the
    /// panel shows a loading state instead of the last icon's details.
    /// Returns the token the metadata request must carry.
    pub fn select(&mut self, icon: IndexItem) -> SelectionToken {
        self.token = SelectionToken(self.token.0 + 1);
        self.icon = Some(icon);
        self.metadata = None;
        self.token
    }

    /// Accept metadata for `token`. Returns false and changes nothing
    /// when a newer selection has been made since the request went out.
    ///
    /// Size and style default to the first option the metadata lists;
    /// an empty list keeps the previous value.
    pub fn apply_metadata(&mut self, token: SelectionToken, metadata: MetadataData) -> bool {
        if !self.is_current(token) {
            return false;
        }

        if let Some(&size) = metadata.size.first() {
            self.current_size = size;
        }
        if let Some(style) = metadata.style.first() {
            self.current_style = style.clone();
        }
        self.metadata = Some(metadata);
        true
    }

    /// Whether a response for `token` would still be shown
    pub fn is_current(&self, token: SelectionToken) -> bool {
        token == self.token && self.icon.is_some()
    }

    pub fn set_size(&mut self, size: u32) {
        self.current_size = size;
    }

    pub fn set_style(&mut self, style: String) {
        self.current_style = style;
    }

    /// Close the panel. In-flight responses become stale.
    pub fn clear(&mut self) {
        self.token = SelectionToken(self.token.0 + 1);
        self.icon = None;
        self.metadata = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(name: &str) -> IndexItem {
        IndexItem {
            name: name.to_string(),
            icon: format!("ic_fluent_{}_16_regular.svg", name.to_lowercase()),
            metaphor: Vec::new(),
            folder: name.to_string(),
        }
    }

    fn metadata(name: &str, size: Vec<u32>, style: &[&str]) -> MetadataData {
        MetadataData {
            name: name.to_string(),
            size,
            style: style.iter().map(|s| s.to_string()).collect(),
            description: format!("{} icon", name),
            ..MetadataData::default()
        }
    }

    #[test]
    fn test_starts_empty_with_defaults() {
        let selection = Selection::new();

        assert!(selection.icon().is_none());
        assert!(selection.metadata().is_none());
        assert_eq!(selection.current_size(), 24);
        assert_eq!(selection.current_style(), "Regular");
    }

    #[test]
    fn test_select_clears_previous_metadata() {
        let mut selection = Selection::new();
        let token = selection.select(icon("Add"));
        assert!(selection.apply_metadata(token, metadata("Add", vec![16], &["Regular"])));

        selection.select(icon("Cut"));

        assert_eq!(selection.icon().map(|i| i.name.as_str()), Some("Cut"));
        assert!(selection.metadata().is_none());
    }

    #[test]
    fn test_metadata_defaults_to_first_options() {
        let mut selection = Selection::new();
        let token = selection.select(icon("Add"));

        selection.apply_metadata(token, metadata("Add", vec![20, 16, 48], &["Filled", "Regular"]));

        assert_eq!(selection.current_size(), 20);
        assert_eq!(selection.current_style(), "Filled");
    }

    #[test]
    fn test_empty_options_keep_previous_values() {
        let mut selection = Selection::new();
        selection.set_size(32);
        selection.set_style("Filled".to_string());
        let token = selection.select(icon("Add"));

        selection.apply_metadata(token, metadata("Add", Vec::new(), &[]));

        assert_eq!(selection.current_size(), 32);
        assert_eq!(selection.current_style(), "Filled");
        assert!(selection.metadata().is_some());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut selection = Selection::new();
        let add_token = selection.select(icon("Add"));
        let cut_token = selection.select(icon("Cut"));

        // Cut resolves first, then the slow Add response arrives
        assert!(selection.apply_metadata(cut_token, metadata("Cut", vec![16], &["Regular"])));
        assert!(!selection.apply_metadata(add_token, metadata("Add", vec![48], &["Filled"])));

        assert_eq!(selection.metadata().map(|m| m.name.as_str()), Some("Cut"));
        assert_eq!(selection.current_size(), 16);
    }

    #[test]
    fn test_stale_response_does_not_end_loading() {
        let mut selection = Selection::new();
        let add_token = selection.select(icon("Add"));
        selection.select(icon("Cut"));

        assert!(!selection.apply_metadata(add_token, metadata("Add", vec![16], &["Regular"])));

        assert!(selection.metadata().is_none());
    }

    #[test]
    fn test_clear_invalidates_pending_requests() {
        let mut selection = Selection::new();
        let token = selection.select(icon("Add"));

        selection.clear();

        assert!(!selection.is_current(token));
        assert!(!selection.apply_metadata(token, metadata("Add", vec![16], &["Regular"])));
        assert!(selection.icon().is_none());
    }

    #[test]
    fn test_tokens_increase() {
        let mut selection = Selection::new();
        let first = selection.select(icon("Add"));
        let second = selection.select(icon("Add"));

        assert!(second > first);
    }
}
