use super::player::Player;
use crate::error::BoardError;

/// Board dimensions of the reference game.
pub const DEFAULT_ROWS: usize = 9;
pub const DEFAULT_COLS: usize = 10;

/// Smallest board on which every winning shape fits.
const MIN_DIMENSION: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Cross,
    Circle,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Cross => Some(Player::Cross),
            Cell::Circle => Some(Player::Circle),
        }
    }

    /// Single-character rendering of this cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Cross => 'X',
            Cell::Circle => 'O',
        }
    }
}

/// A winning shape as offsets relative to its top-left anchor, together
/// with its bounding box.
struct ShapeTemplate {
    cells: [(usize, usize); 4],
    rows: usize,
    cols: usize,
}

/// The four "bent" winning shapes: the S and Z tetromino outlines in both
/// orientations. Lying variants span 2 rows, standing variants span 3.
///
/// ```text
///   . X X     X X .     X .     . X
///   X X .     . X X     X X     X X
///                       . X     X .
/// ```
const WINNING_SHAPES: [ShapeTemplate; 4] = [
    // lying S
    ShapeTemplate {
        cells: [(0, 1), (0, 2), (1, 0), (1, 1)],
        rows: 2,
        cols: 3,
    },
    // lying Z
    ShapeTemplate {
        cells: [(0, 0), (0, 1), (1, 1), (1, 2)],
        rows: 2,
        cols: 3,
    },
    // standing S
    ShapeTemplate {
        cells: [(0, 0), (1, 0), (1, 1), (2, 1)],
        rows: 3,
        cols: 2,
    },
    // standing Z
    ShapeTemplate {
        cells: [(0, 1), (1, 0), (1, 1), (2, 0)],
        rows: 3,
        cols: 2,
    },
];

/// The game grid. Row 0 is the top; tokens stack from the bottom row
/// upward, so within a column every cell below a filled cell is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Both dimensions must be at least 3 so
    /// that every winning shape fits.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
            return Err(BoardError::InvalidConfiguration { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::InvalidPosition {
                row,
                column: col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[self.index(row, col)])
    }

    /// Check if a column is full. Under the gravity invariant the top
    /// cell is filled iff the whole column is.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.cells[self.index(0, col)] != Cell::Empty
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Drop a marker into a column; it lands in the lowest empty cell.
    /// Returns the row where it landed. On any error the board is left
    /// unmodified.
    pub fn insert(&mut self, col: usize, cell: Cell) -> Result<usize, BoardError> {
        if col >= self.cols {
            return Err(BoardError::InvalidPosition {
                row: 0,
                column: col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        if cell == Cell::Empty {
            return Err(BoardError::InvalidSymbol);
        }
        if self.is_column_full(col) {
            return Err(BoardError::ColumnFull { column: col });
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            let idx = self.index(row, col);
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = cell;
                return Ok(row);
            }
        }

        unreachable!("column should not be full if is_column_full returned false");
    }

    /// Scan the whole grid for a completed winning shape and return its
    /// owner. At most one player can have a completed shape under
    /// alternating single-insert turns, so scan order does not matter.
    pub fn winner(&self) -> Option<Player> {
        for template in &WINNING_SHAPES {
            if template.rows > self.rows || template.cols > self.cols {
                continue;
            }
            for row in 0..=self.rows - template.rows {
                for col in 0..=self.cols - template.cols {
                    if let Some(player) = self.shape_owner(template, row, col) {
                        return Some(player);
                    }
                }
            }
        }
        None
    }

    /// The player occupying all four cells of `template` anchored at
    /// (row, col), if any. The anchor is known to be in bounds.
    fn shape_owner(&self, template: &ShapeTemplate, row: usize, col: usize) -> Option<Player> {
        let (dr, dc) = template.cells[0];
        let first = self.cells[self.index(row + dr, col + dc)];
        let player = first.player()?;
        let complete = template.cells[1..]
            .iter()
            .all(|&(dr, dc)| self.cells[self.index(row + dr, col + dc)] == first);
        if complete {
            Some(player)
        } else {
            None
        }
    }

    /// Render the grid as one line per row, cells space-separated.
    pub fn to_display_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| self.cells[self.index(row, col)].glyph().to_string())
                .collect();
            lines.push(line.join(" "));
        }
        lines.join("\n")
    }
}
