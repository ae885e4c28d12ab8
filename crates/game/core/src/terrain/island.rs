//! Island mask: a noisy ellipse surrounded by water.

use crate::world::{Dimensions, Grid, Position, TileKind};

use super::GenerationParams;
use super::noise::ValueNoise;

/// Ellipse centred on the grid with axes proportional to its size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IslandShape {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl IslandShape {
    pub fn new(dimensions: Dimensions, params: &GenerationParams) -> Self {
        let width = f64::from(dimensions.width);
        let height = f64::from(dimensions.height);
        Self {
            cx: (width - 1.0) / 2.0,
            cy: (height - 1.0) / 2.0,
            rx: (width * params.ellipse_ratio).min(params.max_radius).max(0.5),
            ry: (height * params.ellipse_ratio).min(params.max_radius).max(0.5),
        }
    }

    /// Normalised squared distance: `< 1` inside the ellipse, `0` at the centre.
    pub fn distance(&self, position: Position) -> f64 {
        let dx = (f64::from(position.x) - self.cx) / self.rx;
        let dy = (f64::from(position.y) - self.cy) / self.ry;
        dx * dx + dy * dy
    }

    pub fn center_x(&self) -> f64 {
        self.cx
    }
}

/// Classifies every cell as land or water and forces the border to water.
///
/// # Formula
///
/// ```text
/// jitter = (noise(x, y) - 0.5) * jitter_amplitude
/// land   = !border && shape.distance(x, y) + jitter < 1
/// ```
pub fn carve_island(
    dimensions: Dimensions,
    shape: &IslandShape,
    noise: &ValueNoise,
    params: &GenerationParams,
) -> Grid {
    let mut grid = Grid::filled(dimensions, TileKind::Water);
    let positions: Vec<Position> = grid.positions().collect();

    for position in positions {
        if dimensions.is_border(position) {
            continue;
        }
        let jitter = (noise.sample(f64::from(position.x), f64::from(position.y)) - 0.5)
            * params.jitter_amplitude;
        if shape.distance(position) + jitter < 1.0 {
            grid.set(position, TileKind::Land);
        }
    }

    grid
}
