//! Core module - local state shared by every command
//!
//! - [`ArcadeSettings`] - user preferences (`settings.json`)
//! - [`ScoreBook`] - best scores and favorites (`scores.json`)
//! - [`storage`] - JSON persistence in the platform config directory

pub mod error;
pub mod scores;
pub mod settings;
pub mod storage;

pub use error::{ArcadeError, ArcadeResult};
pub use scores::{GameKind, ScoreBook};
pub use settings::ArcadeSettings;
pub use storage::config_dir;
