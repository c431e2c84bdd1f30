/// State management module
///
/// This module handles all application state, including:
/// - The JSON data model shared with the index generator (data.rs)
/// - The loaded catalog and the style/search filter (index.rs)
/// - Column fitting and page slicing (pager.rs)
/// - Search, style and page state of the grid (browse.rs)
/// - The icon shown in the detail panel (selection.rs)
/// - Persisted user preferences (prefs.rs)

pub mod browse;
pub mod data;
pub mod index;
pub mod pager;
pub mod prefs;
pub mod selection;
