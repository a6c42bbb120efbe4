use env_logger::Env;
use log::debug;
use rustarcade::{app::State, config::GameConfig};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("rustarcade=debug")).init();
    debug!("Debug on");
    let config = GameConfig::from_env();
    iced::application("Rust Arcade", State::update, State::view)
        .window_size(iced::Size::new(700.0, 720.0))
        .subscription(State::subscription)
        .run_with(move || (State::new(config), iced::Task::none()))
}
