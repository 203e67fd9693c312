//! Turns an untrusted free-text generator response into ordered slides.
//!
//! Heading detection runs an ordered list of matchers per line, first match
//! wins. Everything else accumulates as bullet content for the open slide.

use deck_common::{Slide, SlideLayout};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::emoji::EmojiPicker;
use crate::fallback::fallback_slides;

/// Content substituted when a slide ends up with no bullet lines.
pub const PLACEHOLDER_CONTENT: &str = "Контент слайда";

#[allow(clippy::expect_used)]
static TITLE_MATCHERS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        // Markdown heading of any depth: "## Title"
        Regex::new(r"^#+\s+(.+)$").expect("valid regex"),
        // Whole line wrapped in bold emphasis: "**Title**"
        Regex::new(r"^\*\*(.+)\*\*$").expect("valid regex"),
        // Explicit slide marker, Latin or Cyrillic: "SLIDE 3: Title"
        Regex::new(r"(?i)^(?:SLIDE|СЛАЙД)\s*\d*[:\-\s]+(.+)$").expect("valid regex"),
    ]
});

#[allow(clippy::expect_used)]
static BULLET_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[*\-]\s+|\d+\.\s+)").expect("valid regex"));

/// Runs the heading matchers in precedence order. Returns the cleaned title
/// text, or `None` when the line is not a heading (or captures nothing).
fn title_capture(line: &str) -> Option<String> {
    for matcher in TITLE_MATCHERS.iter() {
        if let Some(caps) = matcher.captures(line) {
            let title = caps[1].replace("**", "").trim().to_string();
            if !title.is_empty() {
                return Some(title);
            }
        }
    }
    None
}

/// A line of three or more hyphens and nothing else.
fn is_separator(line: &str) -> bool {
    line.len() >= 3 && line.bytes().all(|b| b == b'-')
}

/// Normalizes `* `, `- ` and `N. ` bullet markers to the bullet glyph.
fn normalize_bullet(line: &str) -> String {
    BULLET_PREFIX.replace(line, "• ").into_owned()
}

fn close_slide(slides: &mut Vec<Slide>, title: String, lines: &mut Vec<String>, emoji: &mut EmojiPicker) {
    let joined = lines.join("\n");
    let content = joined.trim();
    let content = if content.is_empty() {
        PLACEHOLDER_CONTENT
    } else {
        content
    };
    // Layout is decided by output position at push time, not by any marker
    // in the input.
    let layout = if slides.is_empty() {
        SlideLayout::Title
    } else {
        SlideLayout::Content
    };
    slides.push(Slide::new(title, content, emoji.pick(), layout));
    lines.clear();
}

/// Parses raw generated text into at most `requested` slides.
///
/// Content lines before the first heading are dropped. When no heading is
/// recognized at all, the whole request falls back to synthetic slides.
/// Padding a short result up to `requested` is the orchestrator's job, not
/// the parser's.
pub fn parse_slides(raw: &str, requested: usize, emoji: &mut EmojiPicker) -> Vec<Slide> {
    let mut slides = Vec::new();
    let mut open_title: Option<String> = None;
    let mut content_lines: Vec<String> = Vec::new();

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(title) = title_capture(line) {
            if let Some(prev) = open_title.take() {
                close_slide(&mut slides, prev, &mut content_lines, emoji);
            }
            open_title = Some(title);
        } else if open_title.is_some() && !is_separator(line) {
            content_lines.push(normalize_bullet(line));
        }
    }

    if let Some(prev) = open_title.take() {
        close_slide(&mut slides, prev, &mut content_lines, emoji);
    }

    if slides.is_empty() {
        tracing::debug!("no headings recognized, substituting fallback slides");
        return fallback_slides(requested, emoji);
    }

    slides.truncate(requested);
    slides
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str, requested: usize) -> Vec<Slide> {
        let mut emoji = EmojiPicker::fixed(0);
        parse_slides(raw, requested, &mut emoji)
    }

    #[test]
    fn well_formed_headings_round_trip() {
        let raw = "## Первый слайд\n\
                   - пункт один\n\
                   - пункт два\n\
                   \n\
                   ## Второй слайд\n\
                   * тезис\n\
                   обычная строка\n";
        let slides = parse(raw, 5);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title, "Первый слайд");
        assert_eq!(slides[0].content, "• пункт один\n• пункт два");
        assert_eq!(slides[0].layout, SlideLayout::Title);
        assert_eq!(slides[1].title, "Второй слайд");
        assert_eq!(slides[1].content, "• тезис\nобычная строка");
        assert_eq!(slides[1].layout, SlideLayout::Content);
    }

    #[test]
    fn bold_and_marker_headings_are_recognized() {
        let raw = "**Жирный заголовок**\ncontent a\nSLIDE 2: Marker Title\ncontent b\nСлайд 3: Кириллица\ncontent c\n";
        let slides = parse(raw, 5);
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].title, "Жирный заголовок");
        assert_eq!(slides[1].title, "Marker Title");
        assert_eq!(slides[2].title, "Кириллица");
    }

    #[test]
    fn numbered_lines_are_bullets_not_headings() {
        let raw = "## Заголовок\n1. первый\n2. второй\n";
        let slides = parse(raw, 5);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].content, "• первый\n• второй");
    }

    #[test]
    fn separator_lines_are_discarded() {
        let raw = "## A\npoint\n---\n----\n## B\nmore\n";
        let slides = parse(raw, 5);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].content, "point");
    }

    #[test]
    fn consecutive_headings_get_placeholder_content() {
        let raw = "## Первый\n## Второй\nтекст\n";
        let slides = parse(raw, 5);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].content, PLACEHOLDER_CONTENT);
        assert_eq!(slides[1].content, "текст");
    }

    #[test]
    fn heading_with_empty_capture_is_ignored() {
        // "## " captures nothing after trimming and must not open a slide;
        // "****" likewise collapses to an empty title.
        let slides = parse("##   \n**  **\nstray\n", 3);
        // No headings at all: parser fell back.
        assert_eq!(slides.len(), 3);
    }

    #[test]
    fn zero_headings_fall_back_to_requested_count() {
        let mut emoji = EmojiPicker::fixed(1);
        let parsed = parse_slides("просто текст\nбез заголовков\n", 4, &mut emoji);
        let mut emoji = EmojiPicker::fixed(1);
        let fallback = fallback_slides(4, &mut emoji);
        assert_eq!(parsed.len(), fallback.len());
        for (p, f) in parsed.iter().zip(&fallback) {
            assert_eq!(p.title, f.title);
            assert_eq!(p.content, f.content);
            assert_eq!(p.layout, f.layout);
        }
    }

    #[test]
    fn output_is_truncated_to_requested_count() {
        let raw = "## A\nx\n## B\nx\n## C\nx\n## D\nx\n";
        let slides = parse(raw, 2);
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title, "A");
        assert_eq!(slides[1].title, "B");
    }

    #[test]
    fn content_before_first_heading_is_dropped() {
        let raw = "вступление без заголовка\n## Слайд\nтезис\n";
        let slides = parse(raw, 3);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].content, "тезис");
    }

    #[test]
    fn emphasis_markers_are_stripped_from_titles() {
        let slides = parse("## **Выделенный** заголовок\nтекст\n", 3);
        assert_eq!(slides[0].title, "Выделенный заголовок");
    }
}
