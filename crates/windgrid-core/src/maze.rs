//! The maze: a rectangle of [`Cell`]s plus the discovery record.
//!
//! Cells are created once when the maze is built and mutated in place by the
//! search engine; none are ever destroyed. The discovery record grows
//! monotonically during one search and is read-only afterward.

use std::fmt;

use crate::error::MazeError;
use crate::geom::Point;

/// What occupies a grid position, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    Passable,
    Wall,
}

impl Terrain {
    /// The two-character wire symbol: `"[]"` for passable, `"##"` for wall.
    pub const fn symbol(self) -> &'static str {
        match self {
            Terrain::Passable => "[]",
            Terrain::Wall => "##",
        }
    }

    /// Decode a wire symbol. Returns `None` for anything else.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "[]" => Some(Terrain::Passable),
            "##" => Some(Terrain::Wall),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Terrain::Wall)
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One grid position with its search bookkeeping.
///
/// `g`, `h` and `f` are meaningful only once `discovery_order` is set. A
/// cell is discovered at most once: there is no decrease-key and no
/// re-opening, so `g` is fixed at first-discovery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub terrain: Terrain,
    pub explored: bool,
    pub discovery_order: Option<u32>,
    pub g: i32,
    pub h: i32,
    pub f: i32,
}

impl Cell {
    fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            explored: false,
            discovery_order: None,
            g: 0,
            h: 0,
            f: 0,
        }
    }
}

/// Snapshot of a cell's bookkeeping taken when it was discovered, keyed by
/// its immutable coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEntry {
    pub pos: Point,
    pub order: u32,
    pub g: i32,
    pub h: i32,
    pub f: i32,
}

/// A `width x height` rectangle of cells plus the ordered discovery record.
#[derive(Debug, Clone)]
pub struct Maze {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    trace: Vec<TraceEntry>,
}

impl Maze {
    /// Build a maze from terrain rows.
    ///
    /// Fails if the rows are ragged or the grid is empty; the input is
    /// never truncated to fit.
    pub fn from_rows(rows: Vec<Vec<Terrain>>) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(MazeError::EmptyMaze);
        }
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::MalformedMaze {
                    row: y,
                    found: row.len(),
                    expected: width,
                });
            }
        }
        let cells = rows
            .into_iter()
            .flat_map(|row| row.into_iter().map(Cell::new))
            .collect();
        Ok(Self {
            width: width as i32,
            height: height as i32,
            cells,
            trace: Vec::new(),
        })
    }

    /// Build a maze from rows of concatenated two-character symbols, e.g.
    /// `"##[]##"`.
    pub fn parse(rows: &[&str]) -> Result<Self, MazeError> {
        let mut terrain = Vec::with_capacity(rows.len());
        for (y, line) in rows.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len() / 2);
            let mut rest = *line;
            while !rest.is_empty() {
                let symbol = rest.get(..2).unwrap_or(rest);
                match Terrain::from_symbol(symbol) {
                    Some(t) => row.push(t),
                    None => {
                        return Err(MazeError::UnknownSymbol {
                            row: y,
                            symbol: symbol.to_owned(),
                        });
                    }
                }
                rest = &rest[symbol.len()..];
            }
            terrain.push(row);
        }
        Self::from_rows(terrain)
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside `[0, width) x [0, height)`.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    fn out_of_bounds(&self, p: Point) -> MazeError {
        MazeError::OutOfBounds {
            pos: p,
            width: self.width,
            height: self.height,
        }
    }

    /// The cell at `p`. Callers are expected to check [`Self::in_bounds`]
    /// first; an `OutOfBounds` error here is a programming defect and is
    /// propagated, not swallowed.
    pub fn cell_at(&self, p: Point) -> Result<&Cell, MazeError> {
        if !self.in_bounds(p) {
            return Err(self.out_of_bounds(p));
        }
        Ok(&self.cells[self.index(p)])
    }

    /// Mutable access to the cell at `p`, same contract as [`Self::cell_at`].
    pub fn cell_at_mut(&mut self, p: Point) -> Result<&mut Cell, MazeError> {
        if !self.in_bounds(p) {
            return Err(self.out_of_bounds(p));
        }
        let idx = self.index(p);
        Ok(&mut self.cells[idx])
    }

    /// Whether `p` is in bounds and a wall. Out-of-bounds positions are the
    /// caller's `in_bounds` check, never this predicate alone.
    pub fn is_blocked(&self, p: Point) -> bool {
        self.in_bounds(p) && self.cells[self.index(p)].terrain.is_wall()
    }

    /// Append a discovery snapshot to the record.
    pub fn record(&mut self, entry: TraceEntry) {
        self.trace.push(entry);
    }

    /// The discovery record, in discovery order.
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// Number of cells discovered so far.
    pub fn explored_count(&self) -> usize {
        self.trace.len()
    }

    /// Iterate over all cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &Cell)> {
        self.cells.iter().enumerate().map(|(i, c)| {
            let p = Point::new(i as i32 % self.width, i as i32 / self.width);
            (p, c)
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn terrain_round_trip() {
        let json = serde_json::to_string(&Terrain::Wall).unwrap();
        let back: Terrain = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Terrain::Wall);
    }

    #[test]
    fn trace_entry_round_trip() {
        let entry = TraceEntry {
            pos: Point::new(3, 1),
            order: 1,
            g: 1,
            h: 18,
            f: 19,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: TraceEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
