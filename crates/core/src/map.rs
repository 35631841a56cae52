//! Room map - a rectangular grid of floor and wall cells
//!
//! Maps are authored as ASCII rows (`.` floor, `#` wall) and stored as a flat
//! row-major vector.
//! Coordinates: (x, y) where x is the column and y the row, both from 0.

/// A single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Wall,
    Floor,
}

impl Tile {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Tile::Floor),
            '#' => Some(Tile::Wall),
            _ => None,
        }
    }

    pub fn is_walkable(&self) -> bool {
        matches!(self, Tile::Floor)
    }
}

/// Rectangular room grid
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomMap {
    width: i32,
    height: i32,
    /// Flat array of tiles, row-major order (y * width + x)
    tiles: Vec<Tile>,
}

impl RoomMap {
    /// Build a map from ASCII rows.
    ///
    /// Unknown characters read as wall. Short rows are padded with wall up to
    /// the widest row so the map is always rectangular.
    ///
    /// # Examples
    ///
    /// ```
    /// use iso_dungeon_core::map::{RoomMap, Tile};
    ///
    /// let map = RoomMap::from_rows(&["..#", "..."]);
    /// assert_eq!(map.width(), 3);
    /// assert_eq!(map.height(), 2);
    /// assert_eq!(map.get(2, 0), Some(Tile::Wall));
    /// assert!(map.is_walkable(2, 1));
    /// assert!(!map.is_walkable(3, 1));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let height = rows.len();
        let mut tiles = Vec::with_capacity(width * height);
        for row in rows {
            let mut n = 0;
            for ch in row.chars() {
                tiles.push(Tile::from_char(ch).unwrap_or(Tile::Wall));
                n += 1;
            }
            tiles.extend(std::iter::repeat(Tile::Wall).take(width - n));
        }

        Self {
            width: width as i32,
            height: height as i32,
            tiles,
        }
    }

    /// An all-floor map.
    pub fn open(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width: width.max(0),
            height: height.max(0),
            tiles: vec![Tile::Floor; len],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Tile at (x, y), or None when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Inside the map and not a wall.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(|t| t.is_walkable())
    }

    /// Iterate all cells as `(x, y, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        let w = self.width.max(1);
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| ((i as i32) % w, (i as i32) / w, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_padded_with_wall() {
        let map = RoomMap::from_rows(&["....", ".."]);
        assert_eq!(map.width(), 4);
        assert_eq!(map.get(3, 1), Some(Tile::Wall));
        assert_eq!(map.get(1, 1), Some(Tile::Floor));
    }

    #[test]
    fn out_of_bounds_is_not_walkable() {
        let map = RoomMap::open(8, 8);
        assert!(map.is_walkable(0, 0));
        assert!(map.is_walkable(7, 7));
        assert!(!map.is_walkable(-1, 0));
        assert!(!map.is_walkable(8, 0));
        assert!(!map.is_walkable(0, 8));
    }

    #[test]
    fn iter_visits_row_major() {
        let map = RoomMap::from_rows(&[".#", "#."]);
        let cells: Vec<_> = map.iter().collect();
        assert_eq!(
            cells,
            vec![
                (0, 0, Tile::Floor),
                (1, 0, Tile::Wall),
                (0, 1, Tile::Wall),
                (1, 1, Tile::Floor),
            ]
        );
    }
}
