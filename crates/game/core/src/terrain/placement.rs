//! Goal and spawn placement plus the reachability repair between them.

use std::collections::VecDeque;

use crate::world::{Direction, Grid, Position, TileKind};

use super::GenerationParams;

/// Places the single goal tile, preferring the northern bands of the island.
///
/// Bands cover the top 40%, 60%, 80% and finally 100% of the vertical land
/// extent. Inside a band the candidate closest to the horizontal centre wins.
/// When no band yields a land cell the search degrades to row-major scans for
/// land, then forest, then mountain.
///
/// `allowed` restricts candidates (used when repairing reachability); `None`
/// accepts every cell.
pub fn place_goal(grid: &mut Grid, allowed: Option<&dyn Fn(Position) -> bool>) -> Option<Position> {
    let accept = |p: Position| allowed.is_none_or(|f| f(p));
    let (min_y, max_y) = land_extent(grid)?;
    let center_x = (f64::from(grid.width()) - 1.0) / 2.0;

    for band in GenerationParams::GOAL_BANDS {
        let limit = min_y + (f64::from(max_y - min_y) * band).floor() as i32;
        let mut candidates: Vec<Position> = grid
            .positions_of(TileKind::Land)
            .filter(|p| p.y <= limit && accept(*p))
            .collect();
        candidates.sort_by(|a, b| {
            let da = (f64::from(a.x) - center_x).abs();
            let db = (f64::from(b.x) - center_x).abs();
            da.total_cmp(&db).then(a.y.cmp(&b.y)).then(a.x.cmp(&b.x))
        });

        for candidate in candidates {
            if grid.is(candidate, TileKind::Land) {
                grid.set(candidate, TileKind::Goal);
                return Some(candidate);
            }
        }
    }

    for kind in [TileKind::Land, TileKind::Forest, TileKind::Mountain] {
        let found = grid.positions_of(kind).find(|p| accept(*p));
        if let Some(position) = found {
            grid.set(position, TileKind::Goal);
            return Some(position);
        }
    }
    None
}

/// Inclusive row range of non-water cells.
fn land_extent(grid: &Grid) -> Option<(i32, i32)> {
    let mut rows = grid
        .positions()
        .filter(|p| !grid.is(*p, TileKind::Water))
        .map(|p| p.y);
    let first = rows.next()?;
    let (min, max) = rows.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
    Some((min, max))
}

/// Recommended spawn: a walkable, non-goal cell near the south coast.
///
/// Searches up to `band_rows` rows north of the southernmost walkable row,
/// scanning columns outward from the centre; falls back to a spiral from the
/// grid centre (goal accepted only as a last resort) and finally to
/// [`GenerationParams::DEFAULT_SPAWN`].
pub fn find_spawn(grid: &Grid, band_rows: u32) -> Position {
    let free = |p: Position| grid.is_walkable(p) && !grid.is(p, TileKind::Goal);
    let center = grid.dimensions().center();

    if let Some(south) = grid.positions().filter(|p| grid.is_walkable(*p)).map(|p| p.y).max() {
        let north = (south - band_rows as i32).max(0);
        for y in (north..=south).rev() {
            for x in columns_outward(center.x, grid.width() as i32) {
                let candidate = Position::new(x, y);
                if free(candidate) {
                    return candidate;
                }
            }
        }
    }

    spiral_search(grid, center, free)
        .or_else(|| spiral_search(grid, center, |p| grid.is_walkable(p)))
        .unwrap_or_else(|| {
            let (x, y) = GenerationParams::DEFAULT_SPAWN;
            Position::new(x, y)
        })
}

/// Column indices ordered by distance from `center`: c, c-1, c+1, c-2, ...
fn columns_outward(center: i32, width: i32) -> impl Iterator<Item = i32> {
    (0..width)
        .flat_map(move |d| [center - d, center + d].into_iter().take(if d == 0 { 1 } else { 2 }))
        .filter(move |x| (0..width).contains(x))
}

/// Ring-by-ring search around `origin` (Chebyshev radius), row-major inside a ring.
fn spiral_search(grid: &Grid, origin: Position, accept: impl Fn(Position) -> bool) -> Option<Position> {
    let max_radius = grid.width().max(grid.height()) as i32;
    for r in 0..max_radius {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx.abs() != r && dy.abs() != r {
                    continue;
                }
                let candidate = origin.offset(dx, dy);
                if grid.contains(candidate) && accept(candidate) {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

/// Cells 4-connected to `start` through walkable tiles, as a row-major mask.
pub fn reachable_from(grid: &Grid, start: Position) -> Vec<bool> {
    let width = grid.width() as usize;
    let mut seen = vec![false; grid.dimensions().area()];
    if !grid.is_walkable(start) {
        return seen;
    }

    let index = |p: Position| p.y as usize * width + p.x as usize;
    let mut queue = VecDeque::from([start]);
    seen[index(start)] = true;

    while let Some(current) = queue.pop_front() {
        for direction in Direction::ALL {
            let next = current.step(direction);
            if grid.is_walkable(next) && !seen[index(next)] {
                seen[index(next)] = true;
                queue.push_back(next);
            }
        }
    }
    seen
}

/// Moves the goal into the spawn's connected region when it is cut off.
///
/// Returns the (possibly unchanged) goal position. If the spawn region holds
/// no other candidate the original goal is restored so exactly one goal
/// always remains.
pub fn ensure_goal_reachable(grid: &mut Grid, goal: Position, spawn: Position) -> Position {
    let reachable = reachable_from(grid, spawn);
    let width = grid.width() as usize;
    let in_region = |p: Position| reachable[p.y as usize * width + p.x as usize];

    if grid.contains(goal) && in_region(goal) {
        return goal;
    }

    grid.set(goal, TileKind::Land);
    let allowed = |p: Position| p != spawn && in_region(p);
    match place_goal(grid, Some(&allowed)) {
        Some(moved) => moved,
        None => {
            grid.set(goal, TileKind::Goal);
            goal
        }
    }
}
