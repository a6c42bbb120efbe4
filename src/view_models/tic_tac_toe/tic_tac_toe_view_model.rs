use std::time::Duration;

use iced::{
    futures::{SinkExt, Stream},
    stream,
};
use log::{debug, error, warn};

use crate::{
    app::Message,
    config::GameConfig,
    models::tic_tac_toe::{
        bots::heuristic_bot::HeuristicBot,
        tic_tac_toe_bot::TicTacToeBot,
        tic_tac_toe_game::{Board, Outcome, Player, TicTacToeGame},
    },
    view_model::ViewModel,
    views::tic_tac_toe::tic_tac_toe_screen::TicTacToeMessage,
};

/// The human always plays X.
pub const HUMAN: Player = Player::X;

#[derive(Debug)]
pub struct TicTacToeViewModel<B: TicTacToeBot = HeuristicBot> {
    game: TicTacToeGame,
    bot: B,
    opponent_delay: Duration,
    // bumped on every human move and reset so late replies can be told apart
    turn_key: u64,
}

impl TicTacToeViewModel<HeuristicBot> {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_bot(HeuristicBot::new(), config)
    }
}

impl<B: TicTacToeBot> TicTacToeViewModel<B> {
    #[must_use]
    pub fn with_bot(bot: B, config: &GameConfig) -> Self {
        debug!(
            "New TicTacToeViewModel. Opponent waits {:?}",
            config.opponent_delay
        );
        Self {
            game: TicTacToeGame::new(),
            bot,
            opponent_delay: config.opponent_delay,
            turn_key: 0,
        }
    }

    /// Stream that waits out the opponent's thinking time and then asks for
    /// its move.
    #[must_use]
    pub fn make_opponent_thread(&self) -> impl Stream<Item = Message> {
        let delay = self.opponent_delay;
        let key = self.turn_key;
        stream::channel(1, move |mut output| async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = output
                .send(Message::TicTacToe(TicTacToeMessage::OpponentMove(key)))
                .await
            {
                debug!("Problem sending OpponentMove message: {e}");
            }
        })
    }

    fn human_move(&mut self, position: usize) {
        if self.game.get_turn() != HUMAN {
            debug!("Ignoring click on {position} while the opponent is thinking");
            return;
        }
        match self.game.apply_move(position, HUMAN) {
            Ok(_) => self.turn_key += 1,
            Err(e) => debug!("Rejected move: {e}"),
        }
    }

    fn opponent_move(&mut self, key: u64) {
        if key != self.turn_key {
            debug!("Dropping stale opponent move {key}, current is {}", self.turn_key);
            return;
        }
        let player = self.bot.get_player();
        if self.game.is_game_over() || self.game.get_turn() != player {
            return;
        }
        let Some(position) = self.bot.make_move(self.game.get_board()) else {
            warn!("Opponent found no free cell");
            return;
        };
        debug!("Opponent picked {position}");
        if let Err(e) = self.game.apply_move(position, player) {
            error!("Opponent made an illegal move: {e}");
        }
    }

    pub fn reset(&mut self) {
        debug!("Resetting tic tac toe");
        self.game.reset();
        self.turn_key += 1;
    }

    #[must_use]
    pub fn get_board(&self) -> &Board {
        self.game.get_board()
    }

    #[must_use]
    pub fn get_turn_key(&self) -> u64 {
        self.turn_key
    }

    /// Whether a cell press would be accepted right now.
    #[must_use]
    pub fn can_play(&self, position: usize) -> bool {
        !self.game.is_game_over()
            && self.game.get_turn() == HUMAN
            && self.game.get_board().is_empty_at(position)
    }

    #[must_use]
    pub fn is_opponent_thinking(&self) -> bool {
        !self.game.is_game_over() && self.game.get_turn() != HUMAN
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Line shown above the board.
    #[must_use]
    pub fn get_status(&self) -> String {
        match self.game.get_outcome() {
            Some(Outcome::Winner(Player::X)) => "Game Over - You (X) wins!".to_string(),
            Some(Outcome::Winner(Player::O)) => "Game Over - AI (O) wins!".to_string(),
            Some(Outcome::Draw) => "Game Over - It's a draw!".to_string(),
            None if self.game.get_turn() == HUMAN => "Your turn (X)".to_string(),
            None => "AI is thinking...".to_string(),
        }
    }

    /// Announcement shown once the game has ended.
    #[must_use]
    pub fn get_result(&self) -> Option<String> {
        self.game.get_outcome().map(|outcome| match outcome {
            Outcome::Winner(Player::X) => "Player X wins!".to_string(),
            Outcome::Winner(Player::O) => "Player AI (O) wins!".to_string(),
            Outcome::Draw => "It's a draw!".to_string(),
        })
    }
}

impl<B: TicTacToeBot> ViewModel for TicTacToeViewModel<B> {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::TicTacToe(ttt_message) = message {
            match ttt_message {
                TicTacToeMessage::Home => return Some(Message::new_home()),
                TicTacToeMessage::Default => (),
                TicTacToeMessage::CellPressed(position) => self.human_move(position),
                TicTacToeMessage::OpponentMove(key) => self.opponent_move(key),
                TicTacToeMessage::Restart => self.reset(),
            }
        } else {
            warn!(
                "Non-tic-tac-toe message sent to TicTacToeViewModel: {:#?}",
                message
            );
        }
        None
    }
}
