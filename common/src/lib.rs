pub mod style;
pub mod types;

pub use style::{PresentationStyle, StylePalette};
pub use types::{Presentation, Slide, SlideLayout};
