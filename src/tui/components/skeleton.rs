//! Skeleton placeholder shown while a page fetch is in flight.
//!
//! Mirrors the loading placeholder of the original listing: a block of
//! shaded bars standing in for the table until the fetch resolves.

/// Number of placeholder bars in the skeleton.
const SKELETON_ROWS: usize = 4;

/// Widest a skeleton bar will render, in columns.
const MAX_BAR_WIDTH: usize = 72;

/// Component rendering the loading placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkeletonComponent;

impl SkeletonComponent {
    /// Creates a new skeleton component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the placeholder bars, clamped to the terminal width.
    #[must_use]
    pub fn view(&self, max_width: usize) -> String {
        let bar_width = max_width.min(MAX_BAR_WIDTH).max(1);
        let bar = "░".repeat(bar_width);

        let mut output = String::new();
        for _ in 0..SKELETON_ROWS {
            output.push_str(&bar);
            output.push('\n');
        }
        output
    }
}
