use log::debug;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::models::tic_tac_toe::{
    tic_tac_toe_bot::TicTacToeBot,
    tic_tac_toe_game::{Board, Player, BOARD_CELLS, CENTER, CORNERS, EDGES},
};

/// Chooses O's reply to `board`.
///
/// Tries, in order: a cell that wins for O, a cell that blocks an X win, the
/// center, a random free corner, a random free edge, then any free cell.
/// Only the random picks consult `rng`.
pub fn select_opponent_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let winning = |player| (0..BOARD_CELLS).find(|&i| board.wins_with(i, player));

    if let Some(position) = winning(Player::O) {
        debug!("Opponent completes a line at {position}");
        return Some(position);
    }
    if let Some(position) = winning(Player::X) {
        debug!("Opponent blocks at {position}");
        return Some(position);
    }
    if board.is_empty_at(CENTER) {
        return Some(CENTER);
    }

    let free = |cells: &[usize]| -> Vec<usize> {
        cells
            .iter()
            .copied()
            .filter(|&i| board.is_empty_at(i))
            .collect()
    };
    if let Some(&corner) = free(&CORNERS[..]).choose(rng) {
        return Some(corner);
    }
    if let Some(&edge) = free(&EDGES[..]).choose(rng) {
        return Some(edge);
    }
    board.empty_cells().collect::<Vec<_>>().choose(rng).copied()
}

/// Bot playing O with [`select_opponent_move`].
#[derive(Debug)]
pub struct HeuristicBot<R: Rng = StdRng> {
    rng: R,
}

impl HeuristicBot<StdRng> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for HeuristicBot<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HeuristicBot<R> {
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TicTacToeBot for HeuristicBot<R> {
    fn get_player(&self) -> Player {
        Player::O
    }

    fn make_move(&mut self, board: &Board) -> Option<usize> {
        select_opponent_move(board, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tic_tac_toe::tic_tac_toe_game::Cell::{self, Empty, O, X};

    fn board(cells: [Cell; BOARD_CELLS]) -> Board {
        Board::from_cells(cells)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_win_beats_block() {
        let b = board([O, O, Empty, X, X, Empty, Empty, Empty, Empty]);
        assert_eq!(select_opponent_move(&b, &mut rng()), Some(2));
    }

    #[test]
    fn test_takes_available_win() {
        let b = board([O, X, X, Empty, O, X, Empty, Empty, Empty]);
        assert_eq!(select_opponent_move(&b, &mut rng()), Some(8));
        let b = board([X, O, X, Empty, O, Empty, X, Empty, Empty]);
        assert_eq!(select_opponent_move(&b, &mut rng()), Some(7));
    }

    #[test]
    fn test_blocks_x() {
        let b = board([X, X, Empty, Empty, O, Empty, Empty, Empty, Empty]);
        assert_eq!(select_opponent_move(&b, &mut rng()), Some(2));
        // blocking outranks the free center
        let b = board([Empty, Empty, X, O, Empty, Empty, Empty, Empty, X]);
        assert_eq!(select_opponent_move(&b, &mut rng()), Some(5));
    }

    #[test]
    fn test_prefers_center() {
        let b = board([X, Empty, Empty, Empty, Empty, Empty, Empty, Empty, Empty]);
        assert_eq!(select_opponent_move(&b, &mut rng()), Some(CENTER));
    }

    #[test]
    fn test_prefers_corner_over_edge() {
        let b = board([Empty, Empty, Empty, Empty, X, Empty, Empty, Empty, Empty]);
        for seed in 0..20 {
            let pick = select_opponent_move(&b, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert!(CORNERS.contains(&pick));
        }
        let b = board([X, Empty, Empty, Empty, O, Empty, Empty, Empty, X]);
        let pick = select_opponent_move(&b, &mut rng()).unwrap();
        assert!([2, 6].contains(&pick));
    }

    #[test]
    fn test_edge_when_corners_taken() {
        let b = board([X, Empty, O, O, X, X, X, Empty, O]);
        assert!(b.winner().is_none());
        for seed in 0..20 {
            let pick = select_opponent_move(&b, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert!([1, 7].contains(&pick));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board([X, O, X, X, O, O, O, X, X]);
        assert_eq!(select_opponent_move(&b, &mut rng()), None);
    }

    #[test]
    fn test_random_picks_are_seeded() {
        let b = board([Empty, Empty, Empty, Empty, X, Empty, Empty, Empty, Empty]);
        let first = select_opponent_move(&b, &mut StdRng::seed_from_u64(3));
        let second = select_opponent_move(&b, &mut StdRng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    #[test]
    fn test_bot_plays_o() {
        let mut bot = HeuristicBot::with_rng(rng());
        assert_eq!(bot.get_player(), Player::O);
        let b = board([O, O, Empty, X, X, Empty, Empty, Empty, Empty]);
        assert_eq!(bot.make_move(&b), Some(2));
    }
}
