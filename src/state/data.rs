/// Shared data structures for the application state
///
/// These structs mirror the JSON documents produced by the icon
/// index generator. Every field is defaulted so that a record with a
/// missing `name` or `metaphor` still loads and simply matches as empty.
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Tag lists may contain `null` entries; they become empty strings
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags: Option<Vec<Option<String>>> = Option::deserialize(deserializer)?;
    Ok(tags
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// One icon's minimal identifying record from the index
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct IndexItem {
    /// Display name (e.g., "Arrow Left")
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Smallest SVG file for this style, used as the grid thumbnail
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    /// Search tags
    #[serde(deserialize_with = "lenient_tags")]
    pub metaphor: Vec<String>,
    /// Asset folder under the source root
    #[serde(deserialize_with = "null_as_default")]
    pub folder: String,
}

/// The full catalog, split by visual style
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexData {
    #[serde(rename = "Regular", default)]
    pub regular: Vec<IndexItem>,
    #[serde(rename = "Filled", default)]
    pub filled: Vec<IndexItem>,
    #[serde(rename = "lastUpdated", default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Extended per-icon description, fetched on demand
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct MetadataData {
    pub name: String,
    /// Available pixel sizes, in the order the generator wrote them
    pub size: Vec<u32>,
    /// Available style names (e.g., "Regular", "Filled")
    pub style: Vec<String>,
    pub keyword: String,
    pub description: String,
    pub metaphor: Vec<String>,
}

/// Which part of the index the grid shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleFilter {
    /// Regular followed by Filled entries whose name Regular lacks
    All,
    #[default]
    Regular,
    Filled,
}

impl StyleFilter {
    pub const ALL: [StyleFilter; 3] = [StyleFilter::All, StyleFilter::Regular, StyleFilter::Filled];
}

impl fmt::Display for StyleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StyleFilter::All => "All",
            StyleFilter::Regular => "Regular",
            StyleFilter::Filled => "Filled",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_tolerates_missing_fields() {
        let json = r#"{
            "Regular": [{"icon": "ic_fluent_add_16_regular.svg", "folder": "Add"}],
            "Filled": []
        }"#;

        let index: IndexData = serde_json::from_str(json).unwrap();

        assert_eq!(index.regular.len(), 1);
        assert_eq!(index.regular[0].name, "");
        assert!(index.regular[0].metaphor.is_empty());
        assert_eq!(index.last_updated, None);
    }

    #[test]
    fn test_index_tolerates_null_values() {
        let json = r#"{
            "Regular": [{"name": null, "icon": "a.svg", "metaphor": ["plus", null], "folder": "Add"}],
            "Filled": [{"name": "Cut", "icon": "b.svg", "metaphor": null, "folder": "Cut"}],
            "lastUpdated": "2025-01-02 03:04:05"
        }"#;

        let index: IndexData = serde_json::from_str(json).unwrap();

        assert_eq!(index.regular[0].name, "");
        assert_eq!(index.regular[0].metaphor, vec!["plus".to_string(), String::new()]);
        assert!(index.filled[0].metaphor.is_empty());
        assert_eq!(index.last_updated.as_deref(), Some("2025-01-02 03:04:05"));
    }

    #[test]
    fn test_metadata_keeps_option_order() {
        let json = r#"{
            "name": "Add",
            "size": [20, 16, 24],
            "style": ["Filled", "Regular"],
            "keyword": "add",
            "description": "Add icon",
            "metaphor": ["plus"]
        }"#;

        let metadata: MetadataData = serde_json::from_str(json).unwrap();

        assert_eq!(metadata.size, vec![20, 16, 24]);
        assert_eq!(metadata.style, vec!["Filled", "Regular"]);
    }
}
