//! Biome features layered on the island mask: mountain ranges and forests.

use crate::rng::RngSource;
use crate::world::{Direction, Grid, NEIGHBORS_8, Position, TileKind};

use super::GenerationParams;
use super::island::IslandShape;

/// Raises a land-proportional number of short mountain ranges.
///
/// Conversion stops once only `keep_land` land cells remain.
///
/// # Formula
///
/// `ranges = clamp(land / land_per_range, min_ranges, max_ranges)`
///
/// Each range starts on interior land and walks
/// `min_range_length..=max_range_length` steps, turning with
/// [`GenerationParams::turn_chance`]. A walk ends as soon as the next cell is
/// not plain land, so ranges never cross water or earlier ridges.
///
/// # Arguments
///
/// * `grid` - Island after masking; only `Land` cells are converted
/// * `shape` - Ellipse used to prefer interior starting cells
/// * `keep_land` - Land cells that must survive conversion
///
/// # Returns
///
/// Number of ranges started.
pub fn raise_mountains(
    grid: &mut Grid,
    shape: &IslandShape,
    params: &GenerationParams,
    keep_land: u32,
    rng: &mut impl RngSource,
) -> u32 {
    let mut land = grid.count(TileKind::Land) as u32;
    let count = (land / params.land_per_range.max(1))
        .clamp(params.min_ranges, params.max_ranges.max(params.min_ranges));

    let mut started = 0;
    for _ in 0..count {
        if land <= keep_land {
            break;
        }
        let Some(start) = pick_interior_land(grid, shape, params, rng) else {
            break;
        };
        started += 1;
        land -= 1;

        let length = rng.range(params.min_range_length, params.max_range_length);
        let mut heading = Direction::ALL[rng.range(0, 3) as usize];
        let mut cursor = start;
        grid.set(cursor, TileKind::Mountain);

        for _ in 0..length {
            heading = next_heading(heading, params, rng);
            let next = cursor.step(heading);
            match grid.get(next) {
                Some(TileKind::Land) if land > keep_land => {
                    grid.set(next, TileKind::Mountain);
                    land -= 1;
                }
                _ => break,
            }
            cursor = next;
        }
    }
    started
}

/// Random land cell, preferring the interior of the ellipse.
fn pick_interior_land(
    grid: &Grid,
    shape: &IslandShape,
    params: &GenerationParams,
    rng: &mut impl RngSource,
) -> Option<Position> {
    let land: Vec<Position> = grid.positions_of(TileKind::Land).collect();
    if land.is_empty() {
        return None;
    }

    for _ in 0..GenerationParams::MAX_PICK_ATTEMPTS {
        let candidate = land[rng.index(land.len())?];
        if shape.distance(candidate) < params.interior_threshold {
            return Some(candidate);
        }
    }
    rng.index(land.len()).map(|i| land[i])
}

/// Biased heading change: mostly straight, sometimes a quarter turn,
/// occasionally a fresh random heading.
fn next_heading(heading: Direction, params: &GenerationParams, rng: &mut impl RngSource) -> Direction {
    let roll = rng.next_unit();
    if roll < params.straight_chance {
        heading
    } else if roll < params.straight_chance + params.turn_chance {
        if rng.chance(0.5) {
            heading.turn_left()
        } else {
            heading.turn_right()
        }
    } else {
        Direction::ALL[rng.range(0, 3) as usize]
    }
}

/// Grows forest clusters by 8-neighbour random walks, then sprinkles lone trees.
///
/// Conversion stops once only `keep_land` land cells remain.
///
/// # Formula
///
/// `seeds = clamp(land / land_per_forest_seed, min_forest_seeds, max_forest_seeds)`
///
/// Each seed walks `min_cluster_size..=max_cluster_size` cells; afterwards
/// every remaining land cell turns to forest with probability
/// [`GenerationParams::sprinkle_chance`]. Mountains are stepped over, water is
/// never entered.
///
/// # Arguments
///
/// * `grid` - Island after mountains were raised
/// * `keep_land` - Land cells that must survive conversion
///
/// # Returns
///
/// Number of cells converted to forest.
pub fn plant_forests(
    grid: &mut Grid,
    params: &GenerationParams,
    keep_land: u32,
    rng: &mut impl RngSource,
) -> u32 {
    let mut land = grid.count(TileKind::Land) as u32;
    let seeds = (land / params.land_per_forest_seed.max(1))
        .clamp(params.min_forest_seeds, params.max_forest_seeds.max(params.min_forest_seeds));

    let mut planted = 0;
    for _ in 0..seeds {
        if land <= keep_land {
            break;
        }
        let candidates: Vec<Position> = grid.positions_of(TileKind::Land).collect();
        let Some(index) = rng.index(candidates.len()) else {
            break;
        };

        let mut cursor = candidates[index];
        grid.set(cursor, TileKind::Forest);
        planted += 1;
        land -= 1;

        let size = rng.range(params.min_cluster_size, params.max_cluster_size);
        for _ in 1..size {
            let (dx, dy) = NEIGHBORS_8[rng.range(0, 7) as usize];
            let next = cursor.offset(dx, dy);
            match grid.get(next) {
                Some(TileKind::Water) | None => continue,
                Some(TileKind::Land) if land > keep_land => {
                    grid.set(next, TileKind::Forest);
                    planted += 1;
                    land -= 1;
                }
                _ => {}
            }
            cursor = next;
        }
    }

    let remaining: Vec<Position> = grid.positions_of(TileKind::Land).collect();
    for position in remaining {
        if rng.chance(params.sprinkle_chance) && land > keep_land {
            grid.set(position, TileKind::Forest);
            planted += 1;
            land -= 1;
        }
    }

    planted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;
    use crate::world::Dimensions;

    fn land_block(width: u32, height: u32) -> Grid {
        let dims = Dimensions::new(width, height);
        let mut grid = Grid::filled(dims, TileKind::Water);
        let inner: Vec<Position> = grid.positions().filter(|p| !dims.is_border(*p)).collect();
        for p in inner {
            grid.set(p, TileKind::Land);
        }
        grid
    }

    #[test]
    fn mountains_never_touch_water() {
        let mut grid = land_block(30, 30);
        let params = GenerationParams::default();
        let shape = IslandShape::new(grid.dimensions(), &params);
        let mut rng = PcgRng::seeded(11);

        let ranges = raise_mountains(&mut grid, &shape, &params, 0, &mut rng);

        assert!((params.min_ranges..=params.max_ranges).contains(&ranges));
        assert!(grid.count(TileKind::Mountain) >= ranges as usize);
        for p in grid.positions().filter(|p| grid.dimensions().is_border(*p)) {
            assert_eq!(grid.get(p), Some(TileKind::Water));
        }
    }

    #[test]
    fn range_length_is_bounded() {
        let params = GenerationParams {
            min_ranges: 1,
            max_ranges: 1,
            ..GenerationParams::default()
        };
        for seed in 0..20 {
            let mut grid = land_block(40, 40);
            let shape = IslandShape::new(grid.dimensions(), &params);
            raise_mountains(&mut grid, &shape, &params, 0, &mut PcgRng::seeded(seed));
            let mountains = grid.count(TileKind::Mountain) as u32;
            assert!(mountains >= 1 && mountains <= params.max_range_length + 1);
        }
    }

    #[test]
    fn ranges_stop_at_existing_mountains() {
        // Land centre, a ring of mountains, then a ring of land beyond it.
        let mut grid = Grid::filled(Dimensions::new(11, 11), TileKind::Water);
        let centre = Position::new(5, 5);
        for dy in -2..=2i32 {
            for dx in -2..=2i32 {
                let kind = match dx.abs().max(dy.abs()) {
                    1 => TileKind::Mountain,
                    _ => TileKind::Land,
                };
                grid.set(centre.offset(dx, dy), kind);
            }
        }
        let params = GenerationParams {
            min_ranges: 1,
            max_ranges: 1,
            min_range_length: 6,
            max_range_length: 6,
            interior_threshold: 0.001,
            ..GenerationParams::default()
        };
        let shape = IslandShape::new(grid.dimensions(), &params);

        let ranges = raise_mountains(&mut grid, &shape, &params, 0, &mut PcgRng::seeded(4));

        assert_eq!(ranges, 1);
        assert_eq!(grid.get(centre), Some(TileKind::Mountain));
        assert_eq!(grid.count(TileKind::Mountain), 9);
        assert_eq!(grid.count(TileKind::Land), 16);
    }

    #[test]
    fn forests_never_overwrite_mountains() {
        let mut grid = land_block(24, 24);
        let mountain = Position::new(12, 12);
        grid.set(mountain, TileKind::Mountain);
        let params = GenerationParams::default();

        let planted = plant_forests(&mut grid, &params, 0, &mut PcgRng::seeded(3));

        assert_eq!(grid.get(mountain), Some(TileKind::Mountain));
        assert_eq!(grid.count(TileKind::Forest), planted as usize);
        assert!(planted >= params.min_forest_seeds);
    }

    #[test]
    fn no_land_means_no_features() {
        let mut grid = Grid::filled(Dimensions::new(12, 12), TileKind::Water);
        let params = GenerationParams::default();
        let shape = IslandShape::new(grid.dimensions(), &params);
        let mut rng = PcgRng::seeded(1);

        assert_eq!(raise_mountains(&mut grid, &shape, &params, 0, &mut rng), 0);
        assert_eq!(plant_forests(&mut grid, &params, 0, &mut rng), 0);
    }

    #[test]
    fn reserved_land_is_never_converted() {
        let mut grid = land_block(14, 14);
        let params = GenerationParams {
            min_forest_seeds: 40,
            max_forest_seeds: 40,
            sprinkle_chance: 1.0,
            ..GenerationParams::default()
        };
        let shape = IslandShape::new(grid.dimensions(), &params);
        let mut rng = PcgRng::seeded(21);

        raise_mountains(&mut grid, &shape, &params, 100, &mut rng);
        plant_forests(&mut grid, &params, 100, &mut rng);

        assert_eq!(grid.count(TileKind::Land), 100);
    }
}
