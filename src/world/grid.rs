//! Static occupancy grid.
//!
//! The map is a row-major rectangle of [`Cell`]s, fixed at construction.
//! World coordinates are continuous; one cell spans `cell_size` world units
//! on each axis.  Anything outside the rectangle counts as solid.

use std::{fs, io, path::Path, str::FromStr};

use glam::Vec2;

/// One grid unit of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
}

/// Integer cell coordinate.  Signed so that world points left of / above the
/// origin stay representable (and are reported out of bounds).
pub type CellPos = (i32, i32);

/// Reference layout: an 8×8 hallway block with an internal pillar grid.
const HALLWAY: [[u8; 8]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 0, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

/// World units per cell in the reference configuration.
pub const DEFAULT_CELL_SIZE: f32 = 64.0;

/// Things that can go wrong while building a map.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("map has no cells")]
    Empty,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell glyph {glyph:?} at row {row}, column {col}")]
    BadGlyph { row: usize, col: usize, glyph: char },

    #[error("{width}×{height} map needs {} cells, got {found}", .width * .height)]
    CellCount {
        width: usize,
        height: usize,
        found: usize,
    },

    #[error("cell size must be a positive finite number, got {0}")]
    BadCellSize(f32),

    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Immutable tile map.
#[derive(Clone, Debug, PartialEq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cell_size: f32,
    cells: Vec<Cell>,
}

impl GridMap {
    /*──────────────────────── construction ────────────────────────*/

    pub fn new(
        width: usize,
        height: usize,
        cells: Vec<Cell>,
        cell_size: f32,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        if cells.len() != width * height {
            return Err(GridError::CellCount {
                width,
                height,
                found: cells.len(),
            });
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(GridError::BadCellSize(cell_size));
        }
        Ok(Self {
            width,
            height,
            cell_size,
            cells,
        })
    }

    /// Build from numeric rows (`0` = empty, anything else = wall).
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], cell_size: f32) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: r.len(),
                });
            }
            cells.extend(r.iter().map(|&v| if v == 0 { Cell::Empty } else { Cell::Wall }));
        }
        Self::new(width, rows.len(), cells, cell_size)
    }

    /// The built-in 8×8 hallway at the reference cell size.
    pub fn hallway() -> Self {
        Self::from_rows(&HALLWAY, DEFAULT_CELL_SIZE).expect("built-in map is well formed")
    }

    /// Load a text map (see [`FromStr`] impl) and apply `cell_size`.
    pub fn from_file<P: AsRef<Path>>(path: P, cell_size: f32) -> Result<Self, GridError> {
        let text = fs::read_to_string(path)?;
        text.parse::<GridMap>()?.with_cell_size(cell_size)
    }

    /// Same cells, rescaled to `cell_size` world units per cell.
    pub fn with_cell_size(self, cell_size: f32) -> Result<Self, GridError> {
        Self::new(self.width, self.height, self.cells, cell_size)
    }

    /*──────────────────────── accessors ───────────────────────────*/

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn in_bounds(&self, (cx, cy): CellPos) -> bool {
        cx >= 0 && cy >= 0 && (cx as usize) < self.width && (cy as usize) < self.height
    }

    /// Cell at `(cx, cy)`, `None` when outside the map.
    #[inline]
    pub fn cell(&self, pos: CellPos) -> Option<Cell> {
        self.in_bounds(pos)
            .then(|| self.cells[pos.1 as usize * self.width + pos.0 as usize])
    }

    /// `true` iff the cell is inside the map and is a wall.
    #[inline]
    pub fn is_wall(&self, cx: i32, cy: i32) -> bool {
        self.cell((cx, cy)) == Some(Cell::Wall)
    }

    /// World point → cell index (`floor(coord / cell_size)` on each axis).
    #[inline]
    pub fn world_to_cell(&self, p: Vec2) -> CellPos {
        let c = (p / self.cell_size).floor();
        (c.x as i32, c.y as i32)
    }

    /// Walls and everything outside the grid are blocked.
    #[inline]
    pub fn is_blocked(&self, p: Vec2) -> bool {
        let cell = self.world_to_cell(p);
        !self.in_bounds(cell) || self.is_wall(cell.0, cell.1)
    }

    /// Centre of a cell in world units.
    #[inline]
    pub fn cell_centre(&self, (cx, cy): CellPos) -> Vec2 {
        (Vec2::new(cx as f32, cy as f32) + 0.5) * self.cell_size
    }

    /// Empty cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = CellPos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| ((i % self.width) as i32, (i / self.width) as i32))
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Wall).count()
    }
}

/// Text layout, one row per line:
///
/// ```text
/// ; comment
/// ########
/// #......#
/// ########
/// ```
///
/// `#`/`1` = wall, `.`/`0`/space = empty.  The parsed map uses
/// [`DEFAULT_CELL_SIZE`].
impl FromStr for GridMap {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .filter(|l| !l.trim_start().starts_with(';'))
            .collect();
        // trailing blank lines are padding, interior ones are an empty row
        let end = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);

        let mut rows = Vec::with_capacity(end);
        for (row, line) in lines[..end].iter().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, glyph) in line.trim_end_matches('\r').chars().enumerate() {
                cells.push(match glyph {
                    '#' | '1' => 1u8,
                    '.' | '0' | ' ' => 0u8,
                    _ => return Err(GridError::BadGlyph { row, col, glyph }),
                });
            }
            rows.push(cells);
        }
        GridMap::from_rows(&rows[..], DEFAULT_CELL_SIZE)
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
