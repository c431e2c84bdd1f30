/// Asset path resolution
///
/// Paths are built purely from the icon's name and folder plus the
/// chosen size and style. Nothing checks that the file exists.
use std::fmt;

use crate::state::data::IndexItem;

/// Downloadable file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetFormat {
    /// Vector source, also what the detail preview shows
    Svg,
    /// Document format for design tools
    Pdf,
    /// Bitmap rasterized locally from the SVG
    Png,
}

impl AssetFormat {
    pub fn extension(self) -> &'static str {
        match self {
            AssetFormat::Svg => "svg",
            AssetFormat::Pdf => "pdf",
            AssetFormat::Png => "png",
        }
    }

    /// The format whose file is read to produce this one
    pub fn source(self) -> AssetFormat {
        match self {
            AssetFormat::Png => AssetFormat::Svg,
            other => other,
        }
    }
}

impl fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_uppercase())
    }
}

/// "Arrow Left" -> "arrow_left"
pub fn normalized_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// `ic_fluent_{name}_{size}_{style}.{ext}`, the name a download is saved as
pub fn file_name(item: &IndexItem, size: u32, style: &str, format: AssetFormat) -> String {
    format!(
        "ic_fluent_{}_{}_{}.{}",
        normalized_name(&item.name),
        size,
        style.to_lowercase(),
        format.extension()
    )
}

/// Path of the file backing `format`, relative to the asset root.
/// PNG resolves to the SVG it is rasterized from.
pub fn resolve_path(item: &IndexItem, size: u32, style: &str, format: AssetFormat) -> String {
    let source = format.source();
    format!(
        "{}/{}/{}",
        item.folder,
        source,
        file_name(item, size, style, source)
    )
}

/// The small SVG shown on the grid card
pub fn thumbnail_path(item: &IndexItem) -> String {
    format!("{}/SVG/{}", item.folder, item.icon)
}

pub fn metadata_path(folder: &str) -> String {
    format!("{}/metadata.json", folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrow_left() -> IndexItem {
        IndexItem {
            name: "Arrow Left".to_string(),
            icon: "ic_fluent_arrow_left_12_regular.svg".to_string(),
            metaphor: vec!["back".to_string()],
            folder: "Arrow Left".to_string(),
        }
    }

    #[test]
    fn test_svg_path() {
        assert_eq!(
            resolve_path(&arrow_left(), 24, "Regular", AssetFormat::Svg),
            "Arrow Left/SVG/ic_fluent_arrow_left_24_regular.svg"
        );
    }

    #[test]
    fn test_pdf_path() {
        assert_eq!(
            resolve_path(&arrow_left(), 20, "Filled", AssetFormat::Pdf),
            "Arrow Left/PDF/ic_fluent_arrow_left_20_filled.pdf"
        );
    }

    #[test]
    fn test_png_reads_from_svg() {
        assert_eq!(
            resolve_path(&arrow_left(), 48, "Filled", AssetFormat::Png),
            resolve_path(&arrow_left(), 48, "Filled", AssetFormat::Svg)
        );
        assert_eq!(
            file_name(&arrow_left(), 48, "Filled", AssetFormat::Png),
            "ic_fluent_arrow_left_48_filled.png"
        );
    }

    #[test]
    fn test_every_space_is_replaced() {
        assert_eq!(normalized_name("Text  Bullet List Square"), "text__bullet_list_square");
    }

    #[test]
    fn test_thumbnail_and_metadata_paths() {
        let item = arrow_left();

        assert_eq!(thumbnail_path(&item), "Arrow Left/SVG/ic_fluent_arrow_left_12_regular.svg");
        assert_eq!(metadata_path(&item.folder), "Arrow Left/metadata.json");
    }
}
