use std::collections::HashSet;

use super::data::{IndexData, IndexItem, StyleFilter};
use crate::assets::source::AssetSource;
use crate::error::Result;

/// The IndexStore holds the icon catalog for the whole session.
/// It is loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct IndexStore {
    data: IndexData,
}

impl IndexStore {
    pub fn new(data: IndexData) -> Self {
        Self { data }
    }

    /// Fetch and parse the index document from the asset source
    pub async fn load(source: AssetSource, index_file: String) -> Result<Self> {
        let bytes = source.fetch(&index_file).await?;
        let store = Self::new(serde_json::from_slice(&bytes)?);

        tracing::info!(
            "📚 Loaded icon index: {} regular, {} filled",
            store.regular().len(),
            store.filled().len()
        );

        Ok(store)
    }

    pub fn regular(&self) -> &[IndexItem] {
        &self.data.regular
    }

    pub fn filled(&self) -> &[IndexItem] {
        &self.data.filled
    }

    /// Timestamp the generator stamped on the index, if any
    pub fn last_updated(&self) -> Option<&str> {
        self.data.last_updated.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.data.regular.is_empty() && self.data.filled.is_empty()
    }

    /// Filter the catalog by style and search term
    pub fn filter(&self, style: StyleFilter, term: &str) -> Vec<&IndexItem> {
        filter(&self.data, style, term)
    }
}

/// Produce the ordered subset of entries matching `style` and `term`.
///
/// For [`StyleFilter::All`] the Regular list comes first, followed by each
/// Filled entry whose name does not appear in Regular. Source order is
/// preserved; nothing is re-sorted.
pub fn filter<'a>(index: &'a IndexData, style: StyleFilter, term: &str) -> Vec<&'a IndexItem> {
    let term = term.to_lowercase();

    base_list(index, style)
        .filter(|item| matches(item, &term))
        .collect()
}

fn base_list<'a>(
    index: &'a IndexData,
    style: StyleFilter,
) -> Box<dyn Iterator<Item = &'a IndexItem> + 'a> {
    match style {
        StyleFilter::Regular => Box::new(index.regular.iter()),
        StyleFilter::Filled => Box::new(index.filled.iter()),
        StyleFilter::All => {
            let regular_names: HashSet<&str> =
                index.regular.iter().map(|item| item.name.as_str()).collect();

            Box::new(
                index.regular.iter().chain(
                    index
                        .filled
                        .iter()
                        .filter(move |item| !regular_names.contains(item.name.as_str())),
                ),
            )
        }
    }
}

/// `term` must already be lower-cased
fn matches(item: &IndexItem, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    item.name.to_lowercase().contains(term)
        || item
            .metaphor
            .iter()
            .any(|tag| tag.to_lowercase().contains(term))
}
