//! Model of the Tic-Tac-Toe game.

use std::fmt;

use log::{debug, info};

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;
/// Index of the center cell.
pub const CENTER: usize = 4;
/// Indices of the corner cells.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
/// Indices of the edge cells.
pub const EDGES: [usize; 4] = [1, 3, 5, 7];
/// Every row, column and diagonal, in row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

type Result<T> = std::result::Result<T, MoveError>;

/// Reasons a move is refused. The board is left untouched in every case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    NotYourTurn(Player),
    Occupied(usize),
    OutOfBounds(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "the game is already over"),
            MoveError::NotYourTurn(player) => write!(f, "it is not {player}'s turn"),
            MoveError::Occupied(position) => write!(f, "cell {position} is already taken"),
            MoveError::OutOfBounds(position) => write!(f, "cell {position} is not on the board"),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Player {
    #[must_use]
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[must_use]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Glyph shown for the cell.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::X => "X",
            Cell::O => "O",
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// The 3x3 grid in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    #[must_use]
    pub fn is_empty_at(&self, position: usize) -> bool {
        self.get(position).is_some_and(Cell::is_empty)
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Indices of every empty cell, in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty_cells().next().is_none()
    }

    /// Returns the player owning a complete line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|&[a, b, c]| {
            let cell = self.cells[a];
            if cell == self.cells[b] && cell == self.cells[c] {
                cell.player()
            } else {
                None
            }
        })
    }

    /// Whether marking the empty cell at `position` for `player` completes a line.
    #[must_use]
    pub fn wins_with(&self, position: usize, player: Player) -> bool {
        if !self.is_empty_at(position) {
            return false;
        }
        let mut trial = *self;
        trial.cells[position] = player.into();
        trial.winner() == Some(player)
    }

    fn set(&mut self, position: usize, player: Player) {
        self.cells[position] = player.into();
    }
}

/// A game of Tic-Tac-Toe. X always moves first.
#[derive(Clone, Debug, Default)]
pub struct TicTacToeGame {
    board: Board,
    turn: Player,
    outcome: Option<Outcome>,
}

impl TicTacToeGame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `position` for `player` and checks whether the game has ended.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] without touching the board if the game is over,
    /// it is not `player`'s turn, or the cell is missing or already taken.
    pub fn apply_move(&mut self, position: usize, player: Player) -> Result<Option<Outcome>> {
        if self.outcome.is_some() {
            return Err(MoveError::GameOver);
        }
        if player != self.turn {
            return Err(MoveError::NotYourTurn(player));
        }
        match self.board.get(position) {
            None => return Err(MoveError::OutOfBounds(position)),
            Some(cell) if !cell.is_empty() => return Err(MoveError::Occupied(position)),
            Some(_) => (),
        }

        self.board.set(position, player);
        debug!("{player} marked cell {position}");

        if let Some(winner) = self.board.winner() {
            info!("Game over. {winner} won");
            self.outcome = Some(Outcome::Winner(winner));
        } else if self.board.is_full() {
            info!("Game over. Draw");
            self.outcome = Some(Outcome::Draw);
        } else {
            self.turn = player.opponent();
        }
        Ok(self.outcome)
    }

    /// Clears the board and hands the first move back to X.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[must_use]
    pub fn get_board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn get_turn(&self) -> Player {
        self.turn
    }

    #[must_use]
    pub fn get_outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut TicTacToeGame, moves: &[usize]) -> Option<Outcome> {
        let mut outcome = None;
        for &position in moves {
            let player = game.get_turn();
            outcome = game.apply_move(position, player).unwrap();
        }
        outcome
    }

    #[test]
    fn test_new_game_is_empty_x_to_move() {
        let game = TicTacToeGame::new();
        assert!(game.get_board().cells().iter().all(|c| c.is_empty()));
        assert_eq!(game.get_turn(), Player::X);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = TicTacToeGame::new();
        assert_eq!(game.apply_move(0, Player::X), Ok(None));
        assert_eq!(game.get_turn(), Player::O);
        assert_eq!(game.apply_move(4, Player::O), Ok(None));
        assert_eq!(game.get_turn(), Player::X);
        assert_eq!(game.get_board().get(0), Some(Cell::X));
        assert_eq!(game.get_board().get(4), Some(Cell::O));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = TicTacToeGame::new();
        game.apply_move(4, Player::X).unwrap();
        let before = *game.get_board();
        assert_eq!(game.apply_move(4, Player::O), Err(MoveError::Occupied(4)));
        assert_eq!(*game.get_board(), before);
        assert_eq!(game.get_turn(), Player::O);
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let mut game = TicTacToeGame::new();
        assert_eq!(
            game.apply_move(0, Player::O),
            Err(MoveError::NotYourTurn(Player::O))
        );
        assert_eq!(*game.get_board(), Board::new());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = TicTacToeGame::new();
        assert_eq!(
            game.apply_move(9, Player::X),
            Err(MoveError::OutOfBounds(9))
        );
        assert_eq!(game.get_turn(), Player::X);
    }

    #[test]
    fn test_top_row_win() {
        let mut game = TicTacToeGame::new();
        // X 0, O 3, X 1, O 4, X 2
        let outcome = play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(outcome, Some(Outcome::Winner(Player::X)));
        assert!(game.is_game_over());
        assert_eq!(game.get_board().winner(), Some(Player::X));
    }

    #[test]
    fn test_moves_after_game_over_rejected() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        let before = *game.get_board();
        assert_eq!(game.apply_move(5, Player::O), Err(MoveError::GameOver));
        assert_eq!(game.apply_move(5, Player::X), Err(MoveError::GameOver));
        assert_eq!(*game.get_board(), before);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut game = TicTacToeGame::new();
        // X O X
        // X O O
        // O X X
        let outcome = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(outcome, Some(Outcome::Draw));
        assert!(game.get_board().is_full());
        assert_eq!(game.get_board().winner(), None);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let mut game = TicTacToeGame::new();
        // X O X
        // O X O
        // O X X
        let outcome = play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(outcome, Some(Outcome::Winner(Player::X)));
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let mut cells = [Cell::Empty; BOARD_CELLS];
            for i in line {
                cells[i] = Cell::O;
            }
            assert_eq!(Board::from_cells(cells).winner(), Some(Player::O), "{line:?}");
        }
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        game.reset();
        assert_eq!(*game.get_board(), Board::new());
        assert_eq!(game.get_turn(), Player::X);
        assert_eq!(game.get_outcome(), None);
        assert_eq!(game.apply_move(4, Player::X), Ok(None));
    }
}
