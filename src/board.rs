//! Board state representation and rules queries

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    lines,
};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game; X always moves first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell mark
    pub fn cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Player::X => "X",
            Player::O => "O",
        })
    }
}

/// A move target: one cell addressed by row and column, each in 0..=2.
///
/// An action is only meaningful relative to a specific board; the same
/// coordinates may be legal on one board and occupied on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Build an action from a row-major cell index (0-8)
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < 9);
        Action {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Row-major cell index of this action
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Result of a game as derived from a board, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

/// Complete board state: a 3x3 grid of cells in row-major order.
///
/// The player to move is derived from the mark counts rather than stored,
/// so a board value can never disagree with its own turn. This type
/// implements `Copy` since it's only 9 bytes; `apply` returns a new value
/// and never mutates in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board; X moves first
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string of nine cells in row-major order.
    ///
    /// Whitespace is filtered out; '.' marks an empty cell. This is the
    /// construction gate for externally supplied positions: mark counts
    /// must be equal or X ahead by one, and a finished line must belong
    /// to the player who moved last.
    ///
    /// # Errors
    ///
    /// Returns an error if the string has fewer than 9 non-whitespace
    /// characters, contains an invalid character, or describes a board no
    /// legal game can reach.
    pub fn from_string(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        board.check_reachable(s)?;
        Ok(board)
    }

    fn check_reachable(&self, context: &str) -> Result<()> {
        let (x_count, o_count) = self.mark_counts();
        if !(x_count == o_count || x_count == o_count + 1) {
            return Err(Error::InvalidMarkCounts { x_count, o_count });
        }

        let impossible = |reason: &str| Error::ImpossibleBoard {
            context: context.to_string(),
            reason: reason.to_string(),
        };

        let x_won = self.has_won(Player::X);
        let o_won = self.has_won(Player::O);
        if x_won && o_won {
            return Err(impossible("both players have completed a line"));
        }
        if x_won && x_count != o_count + 1 {
            return Err(impossible("X completed a line but did not move last"));
        }
        if o_won && x_count != o_count {
            return Err(impossible("O completed a line but did not move last"));
        }

        Ok(())
    }

    fn mark_counts(&self) -> (usize, usize) {
        let x_count = self.cells.iter().filter(|&&c| c == Cell::X).count();
        let o_count = self.cells.iter().filter(|&&c| c == Cell::O).count();
        (x_count, o_count)
    }

    /// The player whose turn it is, derived from the mark counts.
    ///
    /// X opens the game, so X is to move whenever the counts are level.
    pub fn to_move(&self) -> Player {
        let (x_count, o_count) = self.mark_counts();
        if x_count > o_count {
            Player::O
        } else {
            Player::X
        }
    }

    /// The mark at an action's cell, or `None` if the action is off the board
    pub fn cell(&self, action: Action) -> Option<Cell> {
        if action.row > 2 || action.col > 2 {
            return None;
        }
        Some(self.cells[action.index()])
    }

    /// All empty cells, in row-major order.
    ///
    /// The order is what makes move selection deterministic: the search
    /// breaks ties by keeping the first action it explores.
    pub fn legal_actions(&self) -> Vec<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(index, _)| Action::from_index(index))
            .collect()
    }

    /// Place the mark of the player to move and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is off the board or targets an
    /// occupied cell. The occupancy check is defensive: callers are
    /// expected to pass actions from `legal_actions` of this same board.
    #[must_use = "apply returns a new board; the original is unchanged"]
    pub fn apply(&self, action: Action) -> Result<Board> {
        if action.row > 2 || action.col > 2 {
            return Err(Error::CellOutOfBounds {
                row: action.row,
                col: action.col,
            });
        }
        if self.cells[action.index()] != Cell::Empty {
            return Err(Error::CellOccupied {
                row: action.row,
                col: action.col,
            });
        }

        let mut next = *self;
        next.cells[action.index()] = self.to_move().cell();
        Ok(next)
    }

    /// Check if a player has completed a line
    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }

    /// The winner, if either player has completed a line
    pub fn winner(&self) -> Option<Player> {
        lines::winner(&self.cells)
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }

    /// Check if the board is full with no winner
    pub fn is_draw(&self) -> bool {
        self.outcome() == Outcome::Draw
    }

    /// Derive the game result from the current cells
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = self.winner() {
            Outcome::Win(winner)
        } else if self.cells.contains(&Cell::Empty) {
            Outcome::InProgress
        } else {
            Outcome::Draw
        }
    }

    /// Zero-sum score of a finished game: +1 if X won, -1 if O won, 0 for
    /// a draw.
    ///
    /// # Errors
    ///
    /// Returns an error while the game is still in progress; callers are
    /// expected to check `is_terminal` first.
    pub fn score(&self) -> Result<i32> {
        match self.outcome() {
            Outcome::Win(Player::X) => Ok(1),
            Outcome::Win(Player::O) => Ok(-1),
            Outcome::Draw => Ok(0),
            Outcome::InProgress => Err(Error::ScoreInProgress),
        }
    }

    /// Canonical nine-character text form, usable as a map key
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.legal_actions().len(), 9);
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_apply_alternates_turn() {
        let board = Board::new();
        assert_eq!(board.to_move(), Player::X);

        let board = board.apply(Action::new(1, 1)).unwrap();
        assert_eq!(board.cell(Action::new(1, 1)), Some(Cell::X));
        assert_eq!(board.to_move(), Player::O);

        let board = board.apply(Action::new(0, 0)).unwrap();
        assert_eq!(board.cell(Action::new(0, 0)), Some(Cell::O));
        assert_eq!(board.to_move(), Player::X);
    }

    #[test]
    fn test_apply_rejects_occupied_cell() {
        let board = Board::new().apply(Action::new(1, 1)).unwrap();
        let err = board.apply(Action::new(1, 1)).unwrap_err();
        assert!(err.to_string().contains("occupied"), "got: {err}");
    }

    #[test]
    fn test_apply_rejects_out_of_bounds() {
        let board = Board::new();
        assert!(board.apply(Action::new(3, 0)).is_err());
        assert!(board.apply(Action::new(0, 3)).is_err());
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let board = Board::new().apply(Action::new(0, 0)).unwrap();
        let snapshot = board;

        let _next = board.apply(Action::new(2, 2)).unwrap();
        assert_eq!(board, snapshot);
        assert_eq!(board.cell(Action::new(2, 2)), Some(Cell::Empty));
    }

    #[test]
    fn test_legal_actions_row_major_order() {
        let board = Board::from_string(".X...O...").unwrap();
        let actions = board.legal_actions();
        assert_eq!(actions.len(), 7);
        assert_eq!(actions[0], Action::new(0, 0));
        assert_eq!(actions[1], Action::new(0, 2));
        assert_eq!(actions[2], Action::new(1, 0));
        assert_eq!(actions.last(), Some(&Action::new(2, 2)));
    }

    #[test]
    fn test_win_detection_row() {
        let board = Board::from_string("XXXOO....").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.score().unwrap(), 1);
    }

    #[test]
    fn test_win_detection_column() {
        let board = Board::from_string("OX.OX.O.X").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.score().unwrap(), -1);
    }

    #[test]
    fn test_win_detection_diagonal() {
        let board = Board::from_string("XO..XO..X").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
        assert!(board.is_draw());
        assert_eq!(board.score().unwrap(), 0);
    }

    #[test]
    fn test_score_rejects_open_game() {
        let board = Board::new();
        assert!(board.score().is_err());
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cell(Action::new(0, 0)), Some(Cell::X));
        assert_eq!(board.cell(Action::new(0, 1)), Some(Cell::O));
        assert_eq!(board.to_move(), Player::O);

        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_from_string_ignores_whitespace() {
        let board = Board::from_string("XOX\n.O.\nX..").unwrap();
        assert_eq!(board.encode(), "XOX.O.X..");
    }

    #[test]
    fn test_from_string_rejects_bad_counts() {
        let err = Board::from_string("XX.......").unwrap_err();
        assert!(matches!(err, Error::InvalidMarkCounts { .. }), "got: {err}");

        let err = Board::from_string("OO.X.....").unwrap_err();
        assert!(matches!(err, Error::InvalidMarkCounts { .. }), "got: {err}");
    }

    #[test]
    fn test_from_string_rejects_double_winner() {
        let result = Board::from_string("XXXOOOX.O");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_string_rejects_play_after_win() {
        // X has the top row but the level counts say O moved last
        let result = Board::from_string("XXXOO.O..");
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO..X...O").unwrap();
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }
}
