/// Per-icon metadata loading
use super::resolver;
use super::source::AssetSource;
use crate::error::Result;
use crate::state::data::MetadataData;

/// Read `{folder}/metadata.json` from the asset source.
///
/// Nothing is cached: every selection fetches again.
pub async fn load_metadata(source: AssetSource, folder: String) -> Result<MetadataData> {
    let path = resolver::metadata_path(&folder);
    let bytes = source.fetch(&path).await?;
    let metadata: MetadataData = serde_json::from_slice(&bytes)?;

    tracing::debug!(
        "Loaded metadata for {}: {} sizes, {} styles",
        folder,
        metadata.size.len(),
        metadata.style.len()
    );

    Ok(metadata)
}
