use super::tic_tac_toe_game::{Board, Player};

/// A computer controlled Tic-Tac-Toe player.
pub trait TicTacToeBot {
    /// Which mark the bot plays.
    fn get_player(&self) -> Player;

    /// Picks the cell to mark next, or `None` if the board is full.
    fn make_move(&mut self, board: &Board) -> Option<usize>;
}
