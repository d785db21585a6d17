//! Home Screen Layout
//!
//! Absolute positions of the home image grid and the navigation buttons
//! under it.

use crate::config::GridConfig;

/// Images shown in the grid, in row-major order
pub const HOME_IMAGES: [&str; 9] = [
    "Ballet",
    "Chilling",
    "Dancing",
    "IceCream",
    "LayingDown",
    "Plant",
    "Playing",
    "Studying",
    "RollerSkating",
];

/// Visible area of the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// One positioned image of the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub image_index: usize,
}

impl GridCell {
    /// Image name, wrapping when the grid has more cells than images
    pub fn image(&self) -> &'static str {
        HOME_IMAGES[self.image_index % HOME_IMAGES.len()]
    }
}

/// Grid centered in the viewport, shifted up by `vertical_offset`
pub fn grid_positions(viewport: Viewport, grid: &GridConfig) -> Vec<GridCell> {
    let span = |count: usize| {
        count as f64 * grid.image_size + count.saturating_sub(1) as f64 * grid.gap
    };
    let start_x = (viewport.width - span(grid.columns)) / 2.0;
    let start_y = (viewport.height - span(grid.rows)) / 2.0 - grid.vertical_offset;
    let step = grid.image_size + grid.gap;

    let mut cells = Vec::with_capacity(grid.rows * grid.columns);
    for row in 0..grid.rows {
        for col in 0..grid.columns {
            cells.push(GridCell {
                x: start_x + col as f64 * step,
                y: start_y + row as f64 * step,
                size: grid.image_size,
                image_index: row * grid.columns + col,
            });
        }
    }
    cells
}

/// Bottom buttons of the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeButton {
    Bucket,
    Hobbies,
}

impl HomeButton {
    pub const ALL: [HomeButton; 2] = [HomeButton::Bucket, HomeButton::Hobbies];

    pub fn image(&self) -> &'static str {
        match self {
            HomeButton::Bucket => "bucket",
            HomeButton::Hobbies => "hobbies",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HomeButton::Bucket => "Bucket list",
            HomeButton::Hobbies => "Travel list",
        }
    }
}
