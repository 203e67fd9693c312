use thiserror::Error;

/// Errors the core surfaces to callers.
///
/// Transport failures and parse shortfalls are deliberately absent: they are
/// absorbed inside the generation path by falling back to synthetic slides.
/// Export failures live in the export crate.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("тема не указана")]
    EmptyTopic,
}
