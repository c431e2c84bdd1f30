/// Saving icon assets to disk
///
/// SVG and PDF files are copied as-is from the asset source. PNG files
/// are produced here by rasterizing the SVG at 4x the chosen size.
use image::{ImageFormat, RgbaImage};
use resvg::{tiny_skia, usvg};
use std::io::Cursor;
use std::path::PathBuf;

use super::resolver::{self, AssetFormat};
use super::source::AssetSource;
use crate::error::{Error, Result};
use crate::state::data::IndexItem;

/// Physical pixels per logical pixel in raster exports
pub const SUPERSAMPLE: u32 = 4;

/// Fetch (and for PNG, rasterize) the asset and write it to `destination`.
/// Returns the path written.
pub async fn export_asset(
    source: AssetSource,
    item: IndexItem,
    size: u32,
    style: String,
    format: AssetFormat,
    destination: PathBuf,
) -> Result<PathBuf> {
    let path = resolver::resolve_path(&item, size, &style, format);
    tracing::info!("💾 Exporting {} as {} to {}", source.locate(&path), format, destination.display());

    let bytes = source.fetch(&path).await?;

    let output = match format {
        AssetFormat::Svg | AssetFormat::Pdf => bytes,
        // Rasterizing is CPU-bound, keep it off the async workers
        AssetFormat::Png => tokio::task::spawn_blocking(move || rasterize(&bytes, size)).await??,
    };

    tokio::fs::write(&destination, &output).await?;

    tracing::info!("✅ Saved {} ({} bytes)", destination.display(), output.len());
    Ok(destination)
}

/// Render an SVG document to PNG bytes, `size * SUPERSAMPLE` pixels square
pub fn rasterize(svg: &[u8], size: u32) -> Result<Vec<u8>> {
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default())?;

    let pixels = size
        .checked_mul(SUPERSAMPLE)
        .ok_or(Error::InvalidSize(size))?;
    let mut pixmap = tiny_skia::Pixmap::new(pixels, pixels).ok_or(Error::InvalidSize(size))?;

    // Stretch the document's own size onto the square surface
    let natural = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        pixels as f32 / natural.width(),
        pixels as f32 / natural.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha, PNG wants straight alpha
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let color = pixel.demultiply();
            [color.red(), color.green(), color.blue(), color.alpha()]
        })
        .collect();

    let image = RgbaImage::from_raw(pixels, pixels, rgba).ok_or(Error::InvalidSize(size))?;

    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 16 16"><rect width="16" height="16" fill="#ff0000"/></svg>"##;

    fn item() -> IndexItem {
        IndexItem {
            name: "Square".to_string(),
            icon: "ic_fluent_square_16_regular.svg".to_string(),
            metaphor: Vec::new(),
            folder: "Square".to_string(),
        }
    }

    /// Lay out an asset root holding a 16px regular SVG and PDF
    fn asset_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let svg_dir = dir.path().join("Square").join("SVG");
        let pdf_dir = dir.path().join("Square").join("PDF");
        std::fs::create_dir_all(&svg_dir).unwrap();
        std::fs::create_dir_all(&pdf_dir).unwrap();
        std::fs::write(svg_dir.join("ic_fluent_square_16_regular.svg"), RED_SQUARE).unwrap();
        std::fs::write(pdf_dir.join("ic_fluent_square_16_regular.pdf"), b"%PDF-1.4").unwrap();
        dir
    }

    #[test]
    fn test_rasterize_supersamples() {
        let png = rasterize(RED_SQUARE.as_bytes(), 24).unwrap();

        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded.dimensions(), (96, 96));
        assert_eq!(decoded.get_pixel(48, 48).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_rasterize_rejects_garbage() {
        assert!(matches!(rasterize(b"not an svg", 16), Err(Error::Svg(_))));
    }

    #[test]
    fn test_rasterize_rejects_zero_size() {
        assert!(matches!(
            rasterize(RED_SQUARE.as_bytes(), 0),
            Err(Error::InvalidSize(0))
        ));
    }

    #[tokio::test]
    async fn test_export_pdf_copies_bytes() {
        let root = asset_root();
        let out = tempfile::tempdir().unwrap();
        let destination = out.path().join("square.pdf");

        let written = export_asset(
            AssetSource::local(root.path()),
            item(),
            16,
            "Regular".to_string(),
            AssetFormat::Pdf,
            destination.clone(),
        )
        .await
        .unwrap();

        assert_eq!(written, destination);
        assert_eq!(std::fs::read(&destination).unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_export_png_rasterizes_svg() {
        let root = asset_root();
        let out = tempfile::tempdir().unwrap();
        let destination = out.path().join("square.png");

        export_asset(
            AssetSource::local(root.path()),
            item(),
            16,
            "Regular".to_string(),
            AssetFormat::Png,
            destination.clone(),
        )
        .await
        .unwrap();

        let decoded = image::open(&destination).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 64));
    }

    #[tokio::test]
    async fn test_export_missing_asset_writes_nothing() {
        let root = asset_root();
        let out = tempfile::tempdir().unwrap();
        let destination = out.path().join("square.svg");

        let result = export_asset(
            AssetSource::local(root.path()),
            item(),
            48,
            "Filled".to_string(),
            AssetFormat::Svg,
            destination.clone(),
        )
        .await;

        assert!(result.is_err());
        assert!(!destination.exists());
    }
}
