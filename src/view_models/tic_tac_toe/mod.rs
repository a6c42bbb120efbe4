pub mod tic_tac_toe_view_model;
