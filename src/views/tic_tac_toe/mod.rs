pub mod tic_tac_toe_screen;
