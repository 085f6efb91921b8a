//! Playfield coordinates.
//!
//! Every on-grid position is a pixel coordinate that is a multiple of the
//! cell size, so a position maps straight onto the rectangle that is drawn
//! for it.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in `direction`.
    pub fn step(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta(cell_size);
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit step scaled by the cell size. Screen y grows downwards.
    pub fn delta(self, cell_size: i32) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Left => (-cell_size, 0),
            Direction::Right => (cell_size, 0),
            Direction::Up => (0, -cell_size),
            Direction::Down => (0, cell_size),
        }
    }

    pub fn is_none(self) -> bool {
        self == Direction::None
    }
}

/// Playfield bounds in pixels plus the cell size every position snaps to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    /// `width` and `height` are expected to be positive multiples of
    /// `cell_size`; the layout presets guarantee it.
    pub const fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Window center snapped down onto the grid.
    pub fn center(&self) -> Position {
        Position {
            x: self.columns() / 2 * self.cell_size,
            y: self.rows() / 2 * self.cell_size,
        }
    }

    /// Whether `pos` lies within `[0, width) x [0, height)`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Position of the cell at column `col`, row `row`.
    pub fn cell(&self, col: i32, row: i32) -> Position {
        Position {
            x: col * self.cell_size,
            y: row * self.cell_size,
        }
    }

    pub fn is_aligned(&self, pos: Position) -> bool {
        pos.x % self.cell_size == 0 && pos.y % self.cell_size == 0
    }
}
