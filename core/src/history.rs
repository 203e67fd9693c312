use std::collections::VecDeque;

use deck_common::Presentation;

/// Append-only, most-recent-first list of completed presentations.
///
/// Lives for the duration of the process; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct History {
    items: VecDeque<Presentation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, presentation: Presentation) {
        self.items.push_front(presentation);
    }

    /// Most recent first.
    pub fn list(&self) -> impl Iterator<Item = &Presentation> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_common::{PresentationStyle, Slide, SlideLayout};

    fn deck(topic: &str) -> Presentation {
        let slides = vec![Slide::new(topic, "• x", "📌", SlideLayout::Title)];
        Presentation::new(topic, PresentationStyle::Corporate, slides)
    }

    #[test]
    fn most_recent_first() {
        let mut history = History::new();
        history.push(deck("первая"));
        history.push(deck("вторая"));
        let topics: Vec<_> = history.list().map(|p| p.topic.as_str()).collect();
        assert_eq!(topics, vec!["вторая", "первая"]);
        assert_eq!(history.len(), 2);
        assert!(!history.is_empty());
    }
}
