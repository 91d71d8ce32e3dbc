use super::action::Direction;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Board dimensions. Walls occupy x = 0, x = width, y = 0 and y = height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True for cells strictly inside the wall ring
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.x > 0 && pos.x < self.width && pos.y > 0 && pos.y < self.height
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        let on_x_edge = pos.x == 0 || pos.x == self.width;
        let on_y_edge = pos.y == 0 || pos.y == self.height;
        let within = (0..=self.width).contains(&pos.x) && (0..=self.height).contains(&pos.y);
        within && (on_x_edge || on_y_edge)
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// All interior cells, row by row
    pub fn interior(&self) -> impl Iterator<Item = Position> + '_ {
        (1..self.height).flat_map(move |y| (1..self.width).map(move |x| Position::new(x, y)))
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current heading; `None` until the first accepted input
    pub heading: Option<Direction>,
}

impl Snake {
    /// A one-segment snake waiting for its first heading
    pub fn new(head: Position) -> Self {
        Self {
            body: vec![head],
            heading: None,
        }
    }

    /// Build a snake from explicit segments, head first.
    /// Returns `None` for an empty body.
    pub fn from_segments(body: Vec<Position>, heading: Option<Direction>) -> Option<Self> {
        if body.is_empty() {
            return None;
        }
        Some(Self { body, heading })
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if position is covered by any segment, tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Point the snake towards `direction` unless it is a reversal.
    /// Returns true if the heading changed.
    pub fn turn(&mut self, direction: Direction) -> bool {
        match self.heading {
            Some(current) if current == direction || current.is_opposite(direction) => false,
            _ => {
                self.heading = Some(direction);
                true
            }
        }
    }

    /// Prepend `new_head`, dropping the tail unless the snake grows
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// Snake covers every interior cell, no room for food
    BoardFull,
}

impl EndReason {
    pub fn describe(&self) -> &'static str {
        match self {
            EndReason::Wall => "hit a wall",
            EndReason::SelfCollision => "ran into itself",
            EndReason::BoardFull => "filled the board",
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub board: Board,
    pub terminated: bool,
    pub end_reason: Option<EndReason>,
    /// Current delay between ticks
    pub tick_delay_ms: u64,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, board: Board, tick_delay_ms: u64) -> Self {
        Self {
            snake,
            food,
            board,
            terminated: false,
            end_reason: None,
            tick_delay_ms,
        }
    }

    /// Current heading of the snake
    pub fn heading(&self) -> Option<Direction> {
        self.snake.heading
    }

    /// The only score the game keeps
    pub fn length(&self) -> usize {
        self.snake.len()
    }

    /// True before the first heading has been accepted
    pub fn is_waiting(&self) -> bool {
        self.snake.heading.is_none() && !self.terminated
    }

    pub(crate) fn terminate(&mut self, reason: EndReason) {
        self.terminated = true;
        self.end_reason = Some(reason);
    }
}
