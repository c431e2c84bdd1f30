/// Icon asset access
///
/// This module handles:
/// - Reading files from a local directory or an HTTP site (source.rs)
/// - Building asset paths from name, size and style (resolver.rs)
/// - Fetching per-icon metadata (metadata.rs)
/// - Saving SVG/PDF files and rasterized PNGs (export.rs)
/// - Caching decoded SVGs for display (cache.rs)

pub mod cache;
pub mod export;
pub mod metadata;
pub mod resolver;
pub mod source;
