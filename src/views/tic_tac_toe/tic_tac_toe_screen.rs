use iced::{
    alignment,
    widget::{button, column, container, text, Column, Row},
    Alignment, Element, Length, Subscription,
};

use crate::{
    app::Message,
    config::GameConfig,
    view::View,
    view_model::ViewModel,
    view_models::tic_tac_toe::tic_tac_toe_view_model::TicTacToeViewModel,
};

#[derive(Clone, Debug)]
pub enum TicTacToeMessage {
    Default,
    Home,
    Restart,
    CellPressed(usize),
    /// The opponent's thinking time for the given turn has run out.
    OpponentMove(u64),
}

impl TicTacToeMessage {
    #[must_use]
    pub fn new() -> Self {
        TicTacToeMessage::Default
    }
}

impl Default for TicTacToeMessage {
    fn default() -> Self {
        TicTacToeMessage::new()
    }
}

#[derive(Debug)]
pub struct TicTacToeScreen {
    view_model: TicTacToeViewModel,
}

impl TicTacToeScreen {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            view_model: TicTacToeViewModel::new(config),
        }
    }
}

impl View for TicTacToeScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    fn view(&self) -> Element<'_, Message> {
        let cell_size = 80;
        let board = self.view_model.get_board();

        let mut grid = Column::new().spacing(5);
        for (r, cells) in board.cells().chunks(3).enumerate() {
            let mut row = Row::new().spacing(5);
            for (c, cell) in cells.iter().enumerate() {
                let position = r * 3 + c;
                let glyph = text(cell.glyph())
                    .size(36)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center);
                let press = self
                    .view_model
                    .can_play(position)
                    .then_some(Message::TicTacToe(TicTacToeMessage::CellPressed(position)));
                row = row.push(
                    button(glyph)
                        .on_press_maybe(press)
                        .width(cell_size)
                        .height(cell_size),
                );
            }
            grid = grid.push(row);
        }

        let restart_button = button(text("Restart Game"))
            .on_press(Message::TicTacToe(TicTacToeMessage::Restart))
            .width(Length::Shrink);
        let home_button = button(text("Back to Home"))
            .on_press(Message::TicTacToe(TicTacToeMessage::Home))
            .width(Length::Shrink);

        let mut content = column![text(self.view_model.get_status()).size(20), grid]
            .spacing(20)
            .align_x(Alignment::Center);
        if let Some(result) = self.view_model.get_result() {
            content = content.push(text(result).size(24));
        }
        content = content.push(restart_button).push(home_button);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.view_model.is_opponent_thinking() {
            // keyed by turn so each human move gets its own timer
            Subscription::run_with_id(
                self.view_model.get_turn_key(),
                self.view_model.make_opponent_thread(),
            )
        } else {
            Subscription::none()
        }
    }
}
