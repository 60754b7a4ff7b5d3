pub mod config;
pub mod engine;
pub mod error;
pub mod goban;
pub mod group;
pub mod ko;
pub mod stone;
pub mod territory;

/// A board point as `(x, y)`, i.e. `(col, row)`, zero-based from the top-left corner.
pub type Point = (u8, u8);

pub use config::GameConfig;
pub use engine::{Captures, Engine, GameView, Placement, Stage};
pub use error::{ConfigError, GoError};
pub use goban::Goban;
pub use group::{Group, GroupArena, GroupId};
pub use ko::Ko;
pub use stone::{Intersection, Stone};
pub use territory::{Score, Tally};
