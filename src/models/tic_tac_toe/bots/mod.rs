pub mod heuristic_bot;
