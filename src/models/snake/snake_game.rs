//! Model of the single player Snake game.
//!
//! Coordinates are in pixel units: every cell is [`CELL_SIZE`] wide and the
//! board spans [`BOARD_WIDTH`] by [`BOARD_HEIGHT`].

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Side length of one cell.
pub const CELL_SIZE: i32 = 30;
/// Number of cell columns.
pub const COLUMNS: i32 = 16;
/// Number of cell rows.
pub const ROWS: i32 = 17;
/// Board width in pixels.
pub const BOARD_WIDTH: i32 = COLUMNS * CELL_SIZE;
/// Board height in pixels.
pub const BOARD_HEIGHT: i32 = ROWS * CELL_SIZE;
/// Segments the snake starts with.
pub const STARTING_SEGMENTS: usize = 3;
/// Points awarded per food eaten.
pub const FOOD_SCORE: u32 = 5;

// Appended on growth and dropped again by the next shift.
const PLACEHOLDER_SEGMENT: Position = Position {
    x: 0,
    y: BOARD_HEIGHT + 40,
};

/// A point on (or just off) the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Top-left corner of the cell at `column`, `row`.
    #[must_use]
    pub const fn from_cell(column: i32, row: i32) -> Self {
        Self::new(column * CELL_SIZE, row * CELL_SIZE)
    }

    /// Center point of the cell whose top-left corner is `self`.
    #[must_use]
    pub const fn center(self) -> Self {
        Self::new(self.x + CELL_SIZE / 2, self.y + CELL_SIZE / 2)
    }

    /// The `(column, row)` this position falls in, if it is on the board.
    #[must_use]
    pub fn cell(self) -> Option<(i32, i32)> {
        if (0..BOARD_WIDTH).contains(&self.x) && (0..BOARD_HEIGHT).contains(&self.y) {
            Some((self.x / CELL_SIZE, self.y / CELL_SIZE))
        } else {
            None
        }
    }
}

/// Direction the snake is travelling in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Pixel offset of one step in this direction.
    #[must_use]
    pub fn value(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -CELL_SIZE),
            Direction::Down => (0, CELL_SIZE),
            Direction::Left => (-CELL_SIZE, 0),
            Direction::Right => (CELL_SIZE, 0),
        }
    }

    #[must_use]
    pub fn get_opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// What happened during a single [`SnakeGame::step`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepInfo {
    pub ate_food: bool,
    pub self_collision: bool,
}

/// Model of the Snake Game.
///
/// The random source only decides where food lands, so a seeded `R` makes a
/// whole game reproducible.
#[derive(Clone, Debug)]
pub struct SnakeGame<R: Rng = StdRng> {
    head: Position,
    body: Vec<Position>,
    segment_count: usize,
    direction: Direction,
    food: Position,
    score: u32,
    game_over: bool,
    rng: R,
}

impl SnakeGame<StdRng> {
    /// Creates a new game whose food placement is seeded from entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for SnakeGame<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SnakeGame<R> {
    /// Creates a new game drawing food positions from `rng`.
    #[must_use]
    pub fn with_rng(mut rng: R) -> Self {
        let head = Position::from_cell(12, 8);
        // Nearest segment first. The first shift keeps (330,240) and (300,240)
        // and drops the tail at (270,240).
        let body = (1..=STARTING_SEGMENTS)
            .map(|i| {
                // usize -> i32 never truncates for the starting length
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let offset = i as i32 * CELL_SIZE;
                Position::new(head.x - offset, head.y)
            })
            .collect();
        let food = Self::random_cell(&mut rng);
        debug!("New snake game. Head at {head:?}, food at {food:?}");
        Self {
            head,
            body,
            segment_count: STARTING_SEGMENTS,
            direction: Direction::Right,
            food,
            score: 0,
            game_over: false,
            rng,
        }
    }

    fn random_cell(rng: &mut R) -> Position {
        Position::from_cell(rng.gen_range(0..COLUMNS), rng.gen_range(0..ROWS))
    }

    /// Advances the game by one tick.
    ///
    /// Does nothing once the game is over.
    pub fn step(&mut self) -> StepInfo {
        let mut info = StepInfo::default();
        if self.game_over {
            return info;
        }

        self.body.truncate(self.segment_count.saturating_sub(1));
        self.body.insert(0, self.head);

        let (dx, dy) = self.direction.value();
        self.head = Position::new(self.head.x + dx, self.head.y + dy);

        info.ate_food = self.eat_food();

        // compared before wrapping so an off-board head can't hit the body
        if self.body.contains(&self.head) {
            info!("Snake ran into itself at {:?}. Final score {}", self.head, self.score);
            self.game_over = true;
            info.self_collision = true;
        }

        self.wrap_around();
        info
    }

    fn eat_food(&mut self) -> bool {
        if self.head != self.food {
            return false;
        }
        // food is allowed to land on the snake
        self.food = Self::random_cell(&mut self.rng);
        self.segment_count += 1;
        self.score += FOOD_SCORE;
        self.body.push(PLACEHOLDER_SEGMENT);
        debug!(
            "Food eaten. Score {}, segments {}, next food at {:?}",
            self.score, self.segment_count, self.food
        );
        true
    }

    // Only the first out of bounds axis gets corrected on a given tick.
    fn wrap_around(&mut self) {
        if self.head.x >= BOARD_WIDTH {
            self.head.x = 0;
        } else if self.head.x < 0 {
            self.head.x = BOARD_WIDTH - CELL_SIZE;
        } else if self.head.y < 0 {
            self.head.y = BOARD_HEIGHT - CELL_SIZE;
        } else if self.head.y >= BOARD_HEIGHT {
            self.head.y = 0;
        }
    }

    /// Steers the snake towards `target` along whichever axis is further away
    /// from the head's center. Returns `true` if the direction changed.
    ///
    /// Turning straight back onto the body is ignored, as is any input after
    /// the game is over.
    pub fn set_direction(&mut self, target: Position) -> bool {
        if self.game_over {
            return false;
        }
        let center = self.head.center();
        let dx = target.x - center.x;
        let dy = target.y - center.y;
        let wanted = if dx.abs() > dy.abs() {
            match dx.signum() {
                1 => Some(Direction::Right),
                -1 => Some(Direction::Left),
                _ => None,
            }
        } else {
            match dy.signum() {
                1 => Some(Direction::Down),
                -1 => Some(Direction::Up),
                _ => None,
            }
        };
        wanted.is_some_and(|direction| self.turn(direction))
    }

    /// Turns the snake to `direction` unless that would reverse it.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.game_over || direction == self.direction.get_opposite() {
            return false;
        }
        let changed = direction != self.direction;
        self.direction = direction;
        changed
    }

    #[must_use]
    pub fn get_head(&self) -> Position {
        self.head
    }

    #[must_use]
    pub fn get_body(&self) -> &[Position] {
        &self.body
    }

    #[must_use]
    pub fn get_segment_count(&self) -> usize {
        self.segment_count
    }

    #[must_use]
    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn get_food(&self) -> Position {
        self.food
    }

    #[must_use]
    pub fn get_score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}
