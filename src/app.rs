use iced::{Element, Subscription};
use log::debug;

use crate::{
    config::GameConfig,
    view::View,
    views::{
        home::{Home, HomeMessage},
        snake::snake_game_screen::{SnakeGameScreen, SnakeMessage},
        tic_tac_toe::tic_tac_toe_screen::{TicTacToeMessage, TicTacToeScreen},
    },
};

// https://docs.rs/iced/latest/i686-unknown-linux-gnu/iced/?search=command#scaling-applications
pub struct State {
    screen: Screen,
    config: GameConfig,
}

#[derive(Debug)]
enum Screen {
    Home(Home),
    Snake(SnakeGameScreen),
    TicTacToe(TicTacToeScreen),
}

impl Screen {
    pub fn new_home() -> Self {
        Screen::Home(Home::new())
    }

    pub fn new_snake(config: &GameConfig) -> Self {
        Screen::Snake(SnakeGameScreen::new(config))
    }

    pub fn new_tic_tac_toe(config: &GameConfig) -> Self {
        Screen::TicTacToe(TicTacToeScreen::new(config))
    }
}

#[derive(Clone, Debug)]
pub enum Message {
    Home(HomeMessage),
    Snake(SnakeMessage),
    TicTacToe(TicTacToeMessage),
}

impl Message {
    #[must_use]
    pub fn new_home() -> Self {
        Message::Home(HomeMessage::new())
    }

    #[must_use]
    pub fn new_snake() -> Self {
        Message::Snake(SnakeMessage::new())
    }

    #[must_use]
    pub fn new_tic_tac_toe() -> Self {
        Message::TicTacToe(TicTacToeMessage::new())
    }
}

impl View for Screen {
    fn update(&mut self, message: Message) -> Option<Message> {
        match self {
            Screen::Home(screen) => screen.update(message),
            Screen::Snake(screen) => screen.update(message),
            Screen::TicTacToe(screen) => screen.update(message),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        match self {
            Screen::Home(screen) => screen.view(),
            Screen::Snake(screen) => screen.view(),
            Screen::TicTacToe(screen) => screen.view(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        match self {
            Screen::Home(screen) => screen.subscription(),
            Screen::Snake(screen) => screen.subscription(),
            Screen::TicTacToe(screen) => screen.subscription(),
        }
    }
}

impl State {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            screen: Screen::new_home(),
            config,
        }
    }

    pub fn update(state: &mut State, message: Message) {
        if let Some(next) = state.screen.update(message) {
            debug!("Switching screen for {next:?}");
            match next {
                Message::Home(_) => state.screen = Screen::new_home(),
                Message::Snake(_) => state.screen = Screen::new_snake(&state.config),
                Message::TicTacToe(_) => state.screen = Screen::new_tic_tac_toe(&state.config),
            }
        }
    }

    #[must_use]
    pub fn view(state: &State) -> Element<'_, Message> {
        state.screen.view()
    }

    #[must_use]
    pub fn subscription(state: &State) -> Subscription<Message> {
        state.screen.subscription()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
