use deck_common::{Slide, SlideLayout};

use crate::emoji::EmojiPicker;

/// Generic section titles cycled through when real content is unavailable.
const FALLBACK_TITLES: [&str; 10] = [
    "Введение",
    "Ключевые моменты",
    "Анализ",
    "Решение",
    "Результаты",
    "Преимущества",
    "Процесс",
    "Команда",
    "Перспективы",
    "Заключение",
];

/// Placeholder bullets shared by every fallback slide.
pub const FALLBACK_CONTENT: &str =
    "• Ключевой тезис слайда\n• Дополнительная информация\n• Вывод или призыв к действию";

/// Produces exactly `count` synthetic placeholder slides. Titles wrap around
/// the fixed list; only the slide at index 0 carries the title layout.
pub fn fallback_slides(count: usize, emoji: &mut EmojiPicker) -> Vec<Slide> {
    (0..count)
        .map(|i| {
            let layout = if i == 0 {
                SlideLayout::Title
            } else {
                SlideLayout::Content
            };
            Slide::new(
                FALLBACK_TITLES[i % FALLBACK_TITLES.len()],
                FALLBACK_CONTENT,
                emoji.pick(),
                layout,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_exactly_count_slides_for_any_count() {
        let mut emoji = EmojiPicker::fixed(0);
        for count in [0usize, 1, 3, 10, 25] {
            assert_eq!(fallback_slides(count, &mut emoji).len(), count);
        }
    }

    #[test]
    fn only_first_slide_gets_title_layout() {
        let mut emoji = EmojiPicker::fixed(0);
        let slides = fallback_slides(5, &mut emoji);
        assert_eq!(slides[0].layout, SlideLayout::Title);
        assert!(slides[1..]
            .iter()
            .all(|s| s.layout == SlideLayout::Content));
    }

    #[test]
    fn titles_wrap_past_the_list_end() {
        let mut emoji = EmojiPicker::fixed(0);
        let slides = fallback_slides(12, &mut emoji);
        assert_eq!(slides[0].title, "Введение");
        assert_eq!(slides[10].title, "Введение");
        assert_eq!(slides[11].title, "Ключевые моменты");
    }

    #[test]
    fn every_slide_carries_the_placeholder_content() {
        let mut emoji = EmojiPicker::fixed(3);
        for slide in fallback_slides(4, &mut emoji) {
            assert_eq!(slide.content, FALLBACK_CONTENT);
            assert!(!slide.emoji.is_empty());
        }
    }
}
