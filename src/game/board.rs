use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::player::Player;

/// The two instantiated board geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// 6x7 grid, pieces drop to the lowest empty slot of a column, four in a row wins.
    ConnectFour,
    /// 3x3 grid, pieces placed directly into cells, three in a row wins.
    TicTacToe,
}

impl Variant {
    pub fn rows(self) -> usize {
        match self {
            Variant::ConnectFour => 6,
            Variant::TicTacToe => 3,
        }
    }

    pub fn cols(self) -> usize {
        match self {
            Variant::ConnectFour => 7,
            Variant::TicTacToe => 3,
        }
    }

    /// Run length required to win.
    pub fn run_len(self) -> usize {
        match self {
            Variant::ConnectFour => 4,
            Variant::TicTacToe => 3,
        }
    }

    /// Whether a move is a column drop (true) or a direct cell placement.
    pub fn gravity(self) -> bool {
        matches!(self, Variant::ConnectFour)
    }

    /// Number of distinct move indices: columns under gravity, cells otherwise.
    pub fn move_count(self) -> usize {
        if self.gravity() {
            self.cols()
        } else {
            self.rows() * self.cols()
        }
    }

    /// The fixed symmetric opening move: center column / center cell.
    pub fn opening_move(self) -> usize {
        self.move_count() / 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    P1,
    P2,
}

impl Cell {
    fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::P1 => 'X',
            Cell::P2 => 'O',
        }
    }
}

/// Mutable grid state for one game. Row 0 is the top.
///
/// Mutated only through [`Board::apply`] (and the crate-private make/unmake
/// pair used by the search). The legal-move set is kept sorted ascending and
/// contains an index iff that column/cell still has an empty slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    variant: Variant,
    cells: Vec<Cell>,
    legal: Vec<usize>,
    turn_count: u32,
}

impl Board {
    /// Create a new empty board for the given variant.
    pub fn new(variant: Variant) -> Self {
        Board {
            variant,
            cells: vec![Cell::Empty; variant.rows() * variant.cols()],
            legal: (0..variant.move_count()).collect(),
            turn_count: 1,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn rows(&self) -> usize {
        self.variant.rows()
    }

    pub fn cols(&self) -> usize {
        self.variant.cols()
    }

    pub fn run_len(&self) -> usize {
        self.variant.run_len()
    }

    /// Get the cell at a specific position. Row 0 is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols() + col]
    }

    /// Open column/cell indices, ascending.
    pub fn legal_moves(&self) -> &[usize] {
        &self.legal
    }

    /// Turn counter, starting at 1 for the first move.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Whose turn it is, by turn parity (odd = player 1).
    pub fn to_move(&self) -> Player {
        if self.turn_count % 2 == 1 {
            Player::P1
        } else {
            Player::P2
        }
    }

    /// Apply a move for the given piece.
    ///
    /// Fails with [`EngineError::IllegalMove`] when the move is not in the
    /// current legal set.
    pub fn apply(&mut self, mv: usize, cell: Cell) -> Result<(), EngineError> {
        if self.legal.binary_search(&mv).is_err() {
            return Err(EngineError::IllegalMove {
                mv,
                legal: self.legal.clone(),
            });
        }
        self.apply_unchecked(mv, cell);
        Ok(())
    }

    /// Apply a move known to be legal. Callers must take `mv` from
    /// [`Board::legal_moves`].
    pub(crate) fn apply_unchecked(&mut self, mv: usize, cell: Cell) {
        if self.variant.gravity() {
            for row in (0..self.rows()).rev() {
                let idx = row * self.cols() + mv;
                if self.cells[idx] == Cell::Empty {
                    self.cells[idx] = cell;
                    break;
                }
            }
            if self.get(0, mv) != Cell::Empty {
                self.remove_legal(mv);
            }
        } else {
            self.cells[mv] = cell;
            self.remove_legal(mv);
        }
        self.turn_count += 1;
    }

    /// Unmake the most recent move in `mv`: pop the topmost piece of the
    /// column (or clear the cell), restoring turn count and legality.
    pub(crate) fn undo(&mut self, mv: usize) {
        if self.variant.gravity() {
            for row in 0..self.rows() {
                let idx = row * self.cols() + mv;
                if self.cells[idx] != Cell::Empty {
                    self.cells[idx] = Cell::Empty;
                    break;
                }
            }
        } else {
            self.cells[mv] = Cell::Empty;
        }
        if let Err(pos) = self.legal.binary_search(&mv) {
            self.legal.insert(pos, mv);
        }
        self.turn_count -= 1;
    }

    fn remove_legal(&mut self, mv: usize) {
        if let Ok(pos) = self.legal.binary_search(&mv) {
            self.legal.remove(pos);
        }
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        self.legal.is_empty()
    }

    /// Check whether any row, column, or diagonal contains a run of at least
    /// `run_len` identical non-empty cells.
    pub fn is_win(&self) -> bool {
        let k = self.run_len();
        self.lines().iter().any(|line| longest_run(line) >= k)
    }

    /// All scan lines: rows, columns, and both diagonal families trimmed to
    /// length >= `run_len`.
    pub(crate) fn lines(&self) -> Vec<Vec<Cell>> {
        let (rows, cols, k) = (self.rows(), self.cols(), self.run_len());
        let mut lines = Vec::with_capacity(rows + cols + 2 * (rows + cols));

        for row in 0..rows {
            lines.push((0..cols).map(|col| self.get(row, col)).collect());
        }
        for col in 0..cols {
            lines.push((0..rows).map(|row| self.get(row, col)).collect());
        }

        // Down-sloping (\) diagonals: start along the top row and left column.
        let mut starts: Vec<(usize, usize)> = (0..cols).map(|col| (0, col)).collect();
        starts.extend((1..rows).map(|row| (row, 0)));
        for (r0, c0) in starts {
            let diag: Vec<Cell> = (0..)
                .map_while(|i| {
                    let (row, col) = (r0 + i, c0 + i);
                    (row < rows && col < cols).then(|| self.get(row, col))
                })
                .collect();
            if diag.len() >= k {
                lines.push(diag);
            }
        }

        // Up-sloping (/) diagonals: start along the bottom row and left column.
        let mut starts: Vec<(usize, usize)> = (0..cols).map(|col| (rows - 1, col)).collect();
        starts.extend((0..rows - 1).map(|row| (row, 0)));
        for (r0, c0) in starts {
            let diag: Vec<Cell> = (0..)
                .map_while(|i| {
                    let col = c0 + i;
                    (i <= r0 && col < cols).then(|| self.get(r0 - i, col))
                })
                .collect();
            if diag.len() >= k {
                lines.push(diag);
            }
        }

        lines
    }

    /// Serialize cell contents to a human-readable grid, top row first.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if col > 0 {
                    out.push(' ');
                }
                out.push(self.get(row, col).glyph());
            }
            out.push('\n');
        }
        out
    }
}

/// Longest run of consecutive equal non-empty cells in a line.
fn longest_run(line: &[Cell]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut prev = Cell::Empty;
    for &cell in line {
        if cell != Cell::Empty && cell == prev {
            current += 1;
        } else if cell != Cell::Empty {
            current = 1;
        } else {
            current = 0;
        }
        longest = longest.max(current);
        prev = cell;
    }
    longest
}
