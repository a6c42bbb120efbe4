pub mod bots;
pub mod tic_tac_toe_bot;
pub mod tic_tac_toe_game;
