//! Grid snake: a segment chain on a fixed grid that grows by eating food and
//! dies on walls or itself.
//!
//! The simulation ([`game`], [`snake`], [`food`], [`geometry`]) has no
//! dependency on the window; [`ui`] adapts it to macroquad.

pub mod clock;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod geometry;
pub mod logger;
pub mod snake;
pub mod ui;

pub use config::Config;
pub use game::{Command, Game, GameState, TickOutcome};
pub use geometry::{Direction, Grid, Position};
