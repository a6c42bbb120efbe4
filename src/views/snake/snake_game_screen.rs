use iced::{
    keyboard::{self, Key},
    time::{self, Instant},
    widget::{button, column, container, mouse_area, row, text, Column, Row},
    Border, Color, Element, Length, Subscription,
};

use crate::{
    app::Message,
    config::GameConfig,
    models::snake::snake_game::{Position, CELL_SIZE},
    view::View,
    view_model::ViewModel,
    view_models::snake::snake_view_model::{SnakeBlock, SnakeViewModel},
};

#[derive(Clone, Debug)]
pub enum SnakeMessage {
    Default,
    Home,
    Restart,
    Timer(Instant),
    Key(Key),
    /// A click on the board, in board coordinates.
    Target(Position),
}

impl SnakeMessage {
    #[must_use]
    pub fn new() -> Self {
        SnakeMessage::Default
    }
}

impl Default for SnakeMessage {
    fn default() -> Self {
        SnakeMessage::new()
    }
}

#[derive(Debug)]
pub struct SnakeGameScreen {
    view_model: SnakeViewModel,
}

impl SnakeGameScreen {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            view_model: SnakeViewModel::new(config),
        }
    }
}

impl View for SnakeGameScreen {
    fn update(&mut self, message: Message) -> Option<Message> {
        self.view_model.update(message)
    }

    #[allow(clippy::cast_precision_loss)]
    fn view(&self) -> Element<'_, Message> {
        let mut grid_view = Column::new();
        let cell_size = CELL_SIZE as f32;

        let make_cell = |color: Color, target: Position| {
            mouse_area(
                container(text(" ").color(color)) // Empty text to preserve size
                    .width(cell_size)
                    .height(cell_size)
                    .style(move |_: &_| container::Style {
                        border: Border {
                            color: Color::from_rgba(1.0, 1.0, 1.0, 0.05),
                            width: 1.0,
                            ..Default::default()
                        },
                        background: Some(color.into()),
                        ..container::Style::default()
                    }),
            )
            .on_press(Message::Snake(SnakeMessage::Target(target)))
        };

        for (r, grid_row) in (0..).zip(self.view_model.get_grid()) {
            let mut row = Row::new();
            for (c, entry) in (0..).zip(grid_row) {
                let color = match entry {
                    SnakeBlock::Empty => Color::BLACK,
                    SnakeBlock::Food => Color::from_rgb(1.0, 1.0, 0.0),
                    SnakeBlock::Body => Color::from_rgb(0.0, 0.0, 1.0),
                    SnakeBlock::Head => Color::from_rgb(1.0, 0.0, 0.0),
                };
                row = row.push(make_cell(color, Position::from_cell(c, r).center()));
            }
            grid_view = grid_view.push(row);
        }

        let home_button = button(text("Back to Home"))
            .on_press(Message::Snake(SnakeMessage::Home))
            .width(160)
            .height(40);
        let restart_button = button(text("Restart"))
            .on_press(Message::Snake(SnakeMessage::Restart))
            .width(80)
            .height(40);
        let score = text(format!("Score: {}", self.view_model.get_score())).size(24);

        let game = container(
            column![
                row![home_button, restart_button, score].spacing(10),
                grid_view,
            ]
            .spacing(10),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center);
        if let Some(banner) = self.view_model.get_game_over_text() {
            return column!(game, text(banner))
                .align_x(iced::alignment::Horizontal::Center)
                .into();
        }
        game.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let keyboard =
            keyboard::on_key_press(|key, _| Some(Message::Snake(SnakeMessage::Key(key))));
        if self.view_model.game_over() {
            return keyboard;
        }
        let timer = time::every(self.view_model.get_time_between_frames())
            .map(SnakeMessage::Timer)
            .map(Message::Snake);
        Subscription::batch(vec![timer, keyboard])
    }
}
