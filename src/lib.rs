pub mod config;
pub use config::Config;

mod format;
pub use format::{format_seconds, format_span, suffix, FormatTime};

mod highscore;
pub use highscore::{HighScore, HighScores};

mod player;
pub use player::{Session, StoredPlayer};

mod store;
pub use store::{JsonStore, UserStore};

mod clock;

mod persist;

mod util;
pub use util::VecExt;

#[cfg(test)]
mod testing;
