/// View code for the main window
///
/// Each submodule builds one region of the window from borrowed state
/// and emits [`crate::Message`]s. None of them hold state of their own.

pub mod details;
pub mod footer;
pub mod grid;
pub mod header;
pub mod toolbar;

/// Widest the main content column grows
pub const MAX_CONTENT_WIDTH: f32 = 1400.0;
/// Horizontal padding on each side of the main content
pub const CONTENT_PADDING: f32 = 24.0;
/// Width of the detail panel while it is open
pub const DETAILS_WIDTH: f32 = 420.0;

/// Width available to the icon grid for a given window width
pub fn grid_width(window_width: f32, details_open: bool) -> f32 {
    let available = if details_open {
        window_width - DETAILS_WIDTH
    } else {
        window_width
    };

    (available.min(MAX_CONTENT_WIDTH) - 2.0 * CONTENT_PADDING).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_width_caps_content() {
        assert_eq!(grid_width(1920.0, false), 1352.0);
        assert_eq!(grid_width(1000.0, false), 952.0);
    }

    #[test]
    fn test_grid_width_makes_room_for_details() {
        assert_eq!(grid_width(1000.0, true), 532.0);
        assert_eq!(grid_width(300.0, true), 0.0);
    }
}
