pub mod home;
pub mod snake;
pub mod tic_tac_toe;
