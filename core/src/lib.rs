//! Core library: prompt building, response parsing, fallback content and
//! deck assembly. The CLI and any other frontend stay thin over this.

pub mod config;
pub mod emoji;
pub mod error;
pub mod fallback;
pub mod generator;
pub mod history;
pub mod parser;

pub use config::Config;
pub use emoji::EmojiPicker;
pub use error::DeckError;
pub use fallback::fallback_slides;
pub use generator::{build_presentation, build_prompt, generate_slides, TextGenerator};
pub use history::History;
pub use parser::parse_slides;
