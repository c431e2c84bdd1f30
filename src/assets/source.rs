use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Where the index, metadata and icon files are read from.
///
/// Both variants serve the layout produced by the index generator:
/// `icons-index.json` at the root and one folder per icon below it.
#[derive(Debug, Clone)]
pub enum AssetSource {
    /// A directory on disk, e.g. the generator's `public/` output
    Local(PathBuf),
    /// An http(s) site hosting the same files
    Remote { base: Url, client: Client },
}

impl AssetSource {
    pub fn local(root: impl Into<PathBuf>) -> Self {
        AssetSource::Local(root.into())
    }

    pub fn remote(base: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(AssetSource::Remote { base, client })
    }

    /// Pick a local or remote source depending on `asset_root`
    pub fn from_config(config: &Config) -> Result<Self> {
        let root = config.asset_root.trim();
        if root.starts_with("http://") || root.starts_with("https://") {
            Self::remote(root, config.request_timeout())
        } else {
            Ok(Self::local(root))
        }
    }

    /// Where `relative` lives, for log messages
    pub fn locate(&self, relative: &str) -> String {
        match self {
            AssetSource::Local(root) => local_path(root, relative).display().to_string(),
            AssetSource::Remote { base, .. } => match remote_url(base, relative) {
                Ok(url) => url.to_string(),
                Err(_) => format!("{}{}", base, relative),
            },
        }
    }

    /// Read the file at `relative` (a `/`-separated path under the root)
    pub async fn fetch(&self, relative: &str) -> Result<Vec<u8>> {
        match self {
            AssetSource::Local(root) => {
                let path = local_path(root, relative);
                Ok(tokio::fs::read(&path).await?)
            }
            AssetSource::Remote { base, client } => {
                let url = remote_url(base, relative)?;
                let response = client.get(url.clone()).send().await?;

                let status = response.status();
                if !status.is_success() {
                    return Err(Error::Status {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }

                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}

fn local_path(root: &Path, relative: &str) -> PathBuf {
    relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |path, segment| path.join(segment))
}

/// Append each segment so that spaces and other reserved characters in
/// folder names are percent-encoded
fn remote_url(base: &Url, relative: &str) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(relative.split('/').filter(|segment| !segment.is_empty()));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_url_encodes_segments() {
        let base = Url::parse("https://icons.example.com/site/").unwrap();

        let url = remote_url(&base, "Arrow Left/SVG/ic_fluent_arrow_left_16_regular.svg").unwrap();

        assert_eq!(
            url.as_str(),
            "https://icons.example.com/site/Arrow%20Left/SVG/ic_fluent_arrow_left_16_regular.svg"
        );
    }

    #[test]
    fn test_remote_url_without_trailing_slash() {
        let base = Url::parse("https://icons.example.com/site").unwrap();

        let url = remote_url(&base, "icons-index.json").unwrap();

        assert_eq!(url.as_str(), "https://icons.example.com/site/icons-index.json");
    }

    #[test]
    fn test_from_config_picks_variant() {
        let mut config = Config::default();
        assert!(matches!(AssetSource::from_config(&config), Ok(AssetSource::Local(_))));

        config.asset_root = "https://icons.example.com".to_string();
        assert!(matches!(
            AssetSource::from_config(&config),
            Ok(AssetSource::Remote { .. })
        ));
    }

    #[test]
    fn test_locate_local() {
        let source = AssetSource::local("/srv/icons");

        let located = source.locate("Add/metadata.json");

        assert_eq!(
            PathBuf::from(located),
            Path::new("/srv/icons").join("Add").join("metadata.json")
        );
    }

    #[tokio::test]
    async fn test_fetch_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Add").join("SVG")).unwrap();
        std::fs::write(dir.path().join("Add").join("SVG").join("a.svg"), b"<svg/>").unwrap();
        let source = AssetSource::local(dir.path());

        let bytes = source.fetch("Add/SVG/a.svg").await.unwrap();

        assert_eq!(bytes, b"<svg/>");
    }

    #[tokio::test]
    async fn test_fetch_missing_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = AssetSource::local(dir.path());

        let result = source.fetch("Missing/metadata.json").await;

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
