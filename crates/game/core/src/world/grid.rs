use super::Position;

/// Grid extent in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width as i32
            && position.y < self.height as i32
    }

    /// Returns true for cells on the outermost ring.
    pub fn is_border(&self, position: Position) -> bool {
        self.contains(position)
            && (position.x == 0
                || position.y == 0
                || position.x == self.width as i32 - 1
                || position.y == self.height as i32 - 1)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Integer center cell (rounded down).
    pub fn center(&self) -> Position {
        Position::new(self.width as i32 / 2, self.height as i32 / 2)
    }
}

/// Terrain class of a single grid cell.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TileKind {
    #[default]
    Water,
    Land,
    Forest,
    Mountain,
    /// The objective tile; arriving here completes the session.
    Goal,
}

impl TileKind {
    /// Tiles the player may occupy.
    pub fn is_walkable(self) -> bool {
        matches!(self, TileKind::Land | TileKind::Forest | TileKind::Goal)
    }

    /// Single-character glyph used by text front-ends and test dumps.
    pub fn glyph(self) -> char {
        match self {
            TileKind::Water => '~',
            TileKind::Land => '.',
            TileKind::Forest => 'T',
            TileKind::Mountain => '^',
            TileKind::Goal => '*',
        }
    }
}

/// Row-major rectangular array of tiles with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: Dimensions,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Creates a grid filled with `fill`.
    pub fn filled(dimensions: Dimensions, fill: TileKind) -> Self {
        Self {
            dimensions,
            tiles: vec![fill; dimensions.area()],
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    /// Tile at `position`, or `None` when out of bounds.
    pub fn get(&self, position: Position) -> Option<TileKind> {
        self.index(position).map(|i| self.tiles[i])
    }

    /// Overwrites the tile at `position`. Returns `false` when out of bounds.
    pub fn set(&mut self, position: Position, kind: TileKind) -> bool {
        match self.index(position) {
            Some(i) => {
                self.tiles[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Returns true if `position` is in bounds and holds `kind`.
    pub fn is(&self, position: Position, kind: TileKind) -> bool {
        self.get(position) == Some(kind)
    }

    pub fn is_walkable(&self, position: Position) -> bool {
        self.get(position).is_some_and(TileKind::is_walkable)
    }

    /// All positions in row-major order (top-left to bottom-right).
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.dimensions.width as i32;
        let height = self.dimensions.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Positions holding `kind`, row-major.
    pub fn positions_of(&self, kind: TileKind) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(move |&p| self.is(p, kind))
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&t| t == kind).count()
    }

    /// Raw row-major tiles.
    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    /// Tiles of row `y`.
    pub fn row(&self, y: u32) -> Option<&[TileKind]> {
        if y >= self.dimensions.height {
            return None;
        }
        let width = self.dimensions.width as usize;
        let start = y as usize * width;
        Some(&self.tiles[start..start + width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_and_set_respect_bounds() {
        let mut grid = Grid::filled(Dimensions::new(4, 3), TileKind::Water);
        assert!(grid.set(Position::new(3, 2), TileKind::Land));
        assert_eq!(grid.get(Position::new(3, 2)), Some(TileKind::Land));
        assert!(!grid.set(Position::new(4, 0), TileKind::Land));
        assert_eq!(grid.get(Position::new(-1, 0)), None);
        assert_eq!(grid.count(TileKind::Land), 1);
    }

    #[test]
    fn walkability_by_kind() {
        assert!(TileKind::Land.is_walkable());
        assert!(TileKind::Forest.is_walkable());
        assert!(TileKind::Goal.is_walkable());
        assert!(!TileKind::Water.is_walkable());
        assert!(!TileKind::Mountain.is_walkable());
    }

    #[test]
    fn border_detection() {
        let dims = Dimensions::new(5, 5);
        assert!(dims.is_border(Position::new(0, 2)));
        assert!(dims.is_border(Position::new(4, 4)));
        assert!(!dims.is_border(Position::new(2, 2)));
        assert!(!dims.is_border(Position::new(5, 5)));
    }

    #[test]
    fn positions_are_row_major() {
        let grid = Grid::filled(Dimensions::new(2, 2), TileKind::Land);
        let order: Vec<Position> = grid.positions().collect();
        assert_eq!(
            order,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1)
            ]
        );
    }
}
