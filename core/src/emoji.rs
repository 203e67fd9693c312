use rand::Rng;

/// Decorative glyphs assigned to generated slides. No semantic mapping.
pub const SLIDE_EMOJIS: [&str; 15] = [
    "📌", "💡", "🎯", "📊", "🚀", "✅", "🔑", "📈", "💼", "🌟", "🔥", "⚡", "🎨", "🛠️", "📣",
];

/// Picks glyphs from the fixed pool through an injected index chooser, so
/// tests can pin the otherwise-random assignment.
pub struct EmojiPicker {
    choose: Box<dyn FnMut(usize) -> usize + Send>,
}

impl EmojiPicker {
    /// Production picker: uniform random choice.
    pub fn random() -> Self {
        Self {
            choose: Box::new(|len| rand::rng().random_range(0..len)),
        }
    }

    /// Deterministic picker that always yields the glyph at `index`
    /// (taken modulo the pool size).
    pub fn fixed(index: usize) -> Self {
        Self {
            choose: Box::new(move |len| index % len),
        }
    }

    /// Picker driven by an arbitrary chooser closure. The closure receives
    /// the pool length and must return an index; out-of-range values are
    /// clamped.
    pub fn with_chooser(choose: impl FnMut(usize) -> usize + Send + 'static) -> Self {
        Self {
            choose: Box::new(choose),
        }
    }

    pub fn pick(&mut self) -> &'static str {
        let index = (self.choose)(SLIDE_EMOJIS.len());
        SLIDE_EMOJIS[index.min(SLIDE_EMOJIS.len() - 1)]
    }
}

impl Default for EmojiPicker {
    fn default() -> Self {
        Self::random()
    }
}

impl std::fmt::Debug for EmojiPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmojiPicker").finish_non_exhaustive()
    }
}
