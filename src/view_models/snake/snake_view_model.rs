use std::time::Duration;

use iced::keyboard::{key::Named, Key};
use log::{debug, info, warn};
use rand::{rngs::StdRng, Rng};

use crate::{
    app::Message,
    config::GameConfig,
    models::snake::snake_game::{Direction, Position, SnakeGame, COLUMNS, ROWS},
    view_model::ViewModel,
    views::snake::snake_game_screen::SnakeMessage,
};

/// What occupies a cell when the board is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeBlock {
    Empty,
    Food,
    Body,
    Head,
}

#[derive(Debug)]
pub struct SnakeViewModel<R: Rng = StdRng> {
    game: SnakeGame<R>,
    time_between_frames: Duration,
}

impl SnakeViewModel<StdRng> {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_game(SnakeGame::new(), config)
    }
}

impl<R: Rng> SnakeViewModel<R> {
    #[must_use]
    pub fn with_game(game: SnakeGame<R>, config: &GameConfig) -> Self {
        debug!("New SnakeViewModel ticking every {:?}", config.snake_tick);
        Self {
            game,
            time_between_frames: config.snake_tick,
        }
    }

    /// Maps arrow keys and WASD onto a direction.
    #[must_use]
    pub fn key_to_direction(key: &Key) -> Option<Direction> {
        match key {
            Key::Named(code) => match code {
                Named::ArrowUp => Some(Direction::Up),
                Named::ArrowDown => Some(Direction::Down),
                Named::ArrowLeft => Some(Direction::Left),
                Named::ArrowRight => Some(Direction::Right),
                _ => None,
            },
            Key::Character(c) => match c.as_str() {
                "w" | "W" => Some(Direction::Up),
                "s" | "S" => Some(Direction::Down),
                "a" | "A" => Some(Direction::Left),
                "d" | "D" => Some(Direction::Right),
                _ => None,
            },
            Key::Unidentified => None,
        }
    }

    /// Board contents indexed as `[row][column]`. The head is drawn over the
    /// food, and the food over the body.
    // cell() only yields non-negative on-board indices
    #[allow(clippy::cast_sign_loss)]
    #[must_use]
    pub fn get_grid(&self) -> Vec<Vec<SnakeBlock>> {
        let mut grid = Vec::new();
        for _ in 0..ROWS {
            grid.push(vec![SnakeBlock::Empty; COLUMNS as usize]);
        }
        let mut paint = |position: Position, block: SnakeBlock| {
            // off-board segments are skipped
            if let Some((column, row)) = position.cell() {
                grid[row as usize][column as usize] = block;
            }
        };
        for segment in self.game.get_body() {
            paint(*segment, SnakeBlock::Body);
        }
        paint(self.game.get_food(), SnakeBlock::Food);
        paint(self.game.get_head(), SnakeBlock::Head);
        grid
    }

    #[must_use]
    pub fn get_game(&self) -> &SnakeGame<R> {
        &self.game
    }

    #[must_use]
    pub fn get_score(&self) -> u32 {
        self.game.get_score()
    }

    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game.is_game_over()
    }

    /// Banner shown once the snake has run into itself.
    #[must_use]
    pub fn get_game_over_text(&self) -> Option<String> {
        self.game_over().then(|| {
            format!(
                "GAME OVER. FINAL SCORE {}. PRESS SPACE OR RESTART TO PLAY AGAIN, OR GO BACK TO HOME",
                self.get_score()
            )
        })
    }

    #[must_use]
    pub fn get_time_between_frames(&self) -> Duration {
        self.time_between_frames
    }
}

impl<R: Rng> ViewModel for SnakeViewModel<R> {
    fn update(&mut self, message: Message) -> Option<Message> {
        if let Message::Snake(snake_message) = message {
            match snake_message {
                SnakeMessage::Home => Some(Message::new_home()),
                // a fresh screen is the restart
                SnakeMessage::Default | SnakeMessage::Restart => Some(Message::new_snake()),
                SnakeMessage::Timer(_) => {
                    if self.game_over() {
                        return None;
                    }
                    let step = self.game.step();
                    if step.self_collision {
                        info!("Snake game over with score {}", self.game.get_score());
                    }
                    None
                }
                SnakeMessage::Target(target) => {
                    if self.game.set_direction(target) {
                        debug!("Steered {:?} towards {:?}", self.game.get_direction(), target);
                    }
                    None
                }
                SnakeMessage::Key(key) => {
                    if self.game_over() {
                        if matches!(key, Key::Named(Named::Space)) {
                            return Some(Message::new_snake());
                        }
                        return None;
                    }
                    if let Some(direction) = Self::key_to_direction(&key) {
                        self.game.turn(direction);
                    }
                    None
                }
            }
        } else {
            warn!("Non-snake message sent to SnakeViewModel: {:#?}", message);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::time::Instant;
    use rand::{
        rngs::{mock::StepRng, StdRng},
        SeedableRng,
    };

    use super::*;

    fn view_model() -> SnakeViewModel<StdRng> {
        SnakeViewModel::with_game(
            SnakeGame::with_rng(StdRng::seed_from_u64(5)),
            &GameConfig::default(),
        )
    }

    fn send<R: Rng>(vm: &mut SnakeViewModel<R>, message: SnakeMessage) -> Option<Message> {
        vm.update(Message::Snake(message))
    }

    #[test]
    fn test_timer_steps_game() {
        let mut vm = view_model();
        let head = vm.get_game().get_head();
        assert!(send(&mut vm, SnakeMessage::Timer(Instant::now())).is_none());
        assert_ne!(vm.get_game().get_head(), head);
    }

    #[test]
    fn test_keys_steer() {
        let mut vm = view_model();
        send(&mut vm, SnakeMessage::Key(Key::Named(Named::ArrowUp)));
        assert_eq!(vm.get_game().get_direction(), Direction::Up);
        send(&mut vm, SnakeMessage::Key(Key::Character("a".into())));
        assert_eq!(vm.get_game().get_direction(), Direction::Left);
        // reverse ignored
        send(&mut vm, SnakeMessage::Key(Key::Named(Named::ArrowRight)));
        assert_eq!(vm.get_game().get_direction(), Direction::Left);
    }

    #[test]
    fn test_click_steers() {
        let mut vm = view_model();
        let head = vm.get_game().get_head().center();
        send(
            &mut vm,
            SnakeMessage::Target(Position::new(head.x, head.y + 90)),
        );
        assert_eq!(vm.get_game().get_direction(), Direction::Down);
    }

    #[test]
    fn test_grid_layers() {
        let vm = view_model();
        let grid = vm.get_grid();
        assert_eq!(grid.len(), ROWS as usize);
        assert!(grid.iter().all(|row| row.len() == COLUMNS as usize));
        let (column, row) = vm.get_game().get_head().cell().unwrap();
        assert_eq!(grid[row as usize][column as usize], SnakeBlock::Head);
        let heads = grid.iter().flatten().filter(|b| **b == SnakeBlock::Head).count();
        assert_eq!(heads, 1);
        let food = grid.iter().flatten().filter(|b| **b == SnakeBlock::Food).count();
        assert!(food <= 1);
    }

    #[test]
    fn test_game_over_text_names_every_way_out() {
        // every food lands on (0, 0)
        let mut vm =
            SnakeViewModel::with_game(SnakeGame::with_rng(StepRng::new(0, 0)), &GameConfig::default());
        let tick = |vm: &mut SnakeViewModel<StepRng>, n| {
            for _ in 0..n {
                send(vm, SnakeMessage::Timer(Instant::now()));
            }
        };
        assert_eq!(vm.get_game_over_text(), None);

        // up the column, then left along the top row onto the food
        send(&mut vm, SnakeMessage::Key(Key::Named(Named::ArrowUp)));
        tick(&mut vm, 8);
        send(&mut vm, SnakeMessage::Key(Key::Named(Named::ArrowLeft)));
        tick(&mut vm, 12);
        assert_eq!(vm.get_score(), 5);
        assert_eq!(vm.get_game_over_text(), None);

        // a tight u-turn bites the body at (30, 0)
        for key in [Named::ArrowDown, Named::ArrowRight, Named::ArrowUp] {
            send(&mut vm, SnakeMessage::Key(Key::Named(key)));
            tick(&mut vm, 1);
        }
        assert!(vm.game_over());
        let banner = vm.get_game_over_text().unwrap();
        assert!(banner.contains("FINAL SCORE 5"));
        assert!(banner.contains("SPACE"));
        assert!(banner.contains("RESTART"));
        assert!(banner.contains("HOME"));
    }

    #[test]
    fn test_navigation() {
        let mut vm = view_model();
        assert!(matches!(
            send(&mut vm, SnakeMessage::Home),
            Some(Message::Home(_))
        ));
        assert!(matches!(
            send(&mut vm, SnakeMessage::Restart),
            Some(Message::Snake(_))
        ));
        assert!(vm.update(Message::new_home()).is_none());
    }
}
