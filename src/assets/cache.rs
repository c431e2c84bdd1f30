/// Decoded SVG handles for grid thumbnails and the detail preview
///
/// Entries are keyed by the resolved asset path. A failed fetch is
/// remembered as `Missing` so the card stays blank instead of being
/// requested on every update.
use iced::widget::svg;
use std::collections::HashMap;

use super::source::AssetSource;

#[derive(Debug, Clone)]
enum Entry {
    Pending,
    Ready(svg::Handle),
    Missing,
}

#[derive(Debug, Default)]
pub struct AssetCache {
    entries: HashMap<String, Entry>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The handle for `path`, if it has loaded
    pub fn get(&self, path: &str) -> Option<&svg::Handle> {
        match self.entries.get(path) {
            Some(Entry::Ready(handle)) => Some(handle),
            _ => None,
        }
    }

    /// Mark `path` as requested. Returns false when it is already
    /// loaded, failed, or in flight.
    pub fn begin(&mut self, path: &str) -> bool {
        if self.entries.contains_key(path) {
            return false;
        }
        self.entries.insert(path.to_string(), Entry::Pending);
        true
    }

    /// Store the outcome of a fetch started with [`AssetCache::begin`]
    pub fn finish(&mut self, path: String, bytes: Option<Vec<u8>>) {
        let entry = match bytes {
            Some(bytes) => Entry::Ready(svg::Handle::from_memory(bytes)),
            None => Entry::Missing,
        };
        self.entries.insert(path, entry);
    }
}

/// Fetch one SVG for the cache. Missing assets are expected (not every
/// size exists in every style), so failures are only logged at debug.
pub async fn fetch_svg(source: AssetSource, path: String) -> (String, Option<Vec<u8>>) {
    match source.fetch(&path).await {
        Ok(bytes) => (path, Some(bytes)),
        Err(e) => {
            tracing::debug!("Asset unavailable {}: {}", source.locate(&path), e);
            (path, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_only_once() {
        let mut cache = AssetCache::new();

        assert!(cache.begin("Add/SVG/a.svg"));
        assert!(!cache.begin("Add/SVG/a.svg"));
        assert!(cache.get("Add/SVG/a.svg").is_none());
    }

    #[test]
    fn test_finish_with_bytes() {
        let mut cache = AssetCache::new();
        cache.begin("Add/SVG/a.svg");

        cache.finish("Add/SVG/a.svg".to_string(), Some(b"<svg/>".to_vec()));

        assert!(cache.get("Add/SVG/a.svg").is_some());
        assert!(!cache.begin("Add/SVG/a.svg"));
    }

    #[test]
    fn test_failure_is_remembered() {
        let mut cache = AssetCache::new();
        cache.begin("Gone/SVG/a.svg");

        cache.finish("Gone/SVG/a.svg".to_string(), None);

        assert!(cache.get("Gone/SVG/a.svg").is_none());
        assert!(!cache.begin("Gone/SVG/a.svg"));
    }

    #[tokio::test]
    async fn test_fetch_svg_reports_missing() {
        let dir = tempfile::tempdir().unwrap();

        let (path, bytes) = fetch_svg(AssetSource::local(dir.path()), "X/SVG/x.svg".to_string()).await;

        assert_eq!(path, "X/SVG/x.svg");
        assert!(bytes.is_none());
    }
}
