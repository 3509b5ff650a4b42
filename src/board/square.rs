use std::fmt;

/// A cell of the 8x8 grid. Row 0 is Light's home row, column 0 is file `a`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

pub const BOARD_SIZE: u8 = 8;

impl Square {
    /// Panics when the coordinate is off the board; callers that step
    /// around the grid go through `offset` instead.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "square ({}, {}) is off the board",
            row,
            col
        );
        Self { row, col }
    }

    pub fn try_new(row: u8, col: u8) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Self { row, col })
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// The square one diagonal step away, or `None` past the edge.
    pub fn offset(&self, row_step: i8, col_step: i8) -> Option<Self> {
        let row = self.row as i8 + row_step;
        let col = self.col as i8 + col_step;
        if row < 0 || col < 0 {
            return None;
        }
        Self::try_new(row as u8, col as u8)
    }

    pub fn is_dark_square(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let mut chars = algebraic.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        let col = file as u8 - b'a';
        let row = rank as u8 - b'1';
        Some(Self::new(row, col))
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", (b'a' + self.col) as char, self.row + 1)
    }

    /// All 64 squares, row-major.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}
