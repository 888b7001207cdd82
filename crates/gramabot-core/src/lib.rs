pub mod config;
pub mod error;
pub mod language;

pub use config::GramabotConfig;
pub use error::{GramabotError, Result};
pub use language::Language;
