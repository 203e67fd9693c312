use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::style::PresentationStyle;

/// Template a slide is rendered with on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideLayout {
    Title,
    Content,
}

/// One structured unit of a presentation.
///
/// `content` is a newline-delimited list of bullet lines; `emoji` is purely
/// decorative. The id is assigned at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub emoji: String,
    pub layout: SlideLayout,
}

impl Slide {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        emoji: impl Into<String>,
        layout: SlideLayout,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            emoji: emoji.into(),
            layout,
        }
    }

    /// Non-empty content lines in order, untouched otherwise.
    pub fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// An ordered, non-empty collection of slides plus metadata.
///
/// A presentation exclusively owns its slides; it is constructed atomically
/// once generation completes and edited in place afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Presentation {
    pub id: Uuid,
    pub title: String,
    pub topic: String,
    pub style: PresentationStyle,
    pub slides: Vec<Slide>,
    pub created_at: DateTime<Utc>,
}

impl Presentation {
    /// Builds a finished presentation. The title comes from the first slide,
    /// falling back to the topic when that is missing or empty.
    pub fn new(topic: impl Into<String>, style: PresentationStyle, slides: Vec<Slide>) -> Self {
        let topic = topic.into();
        let title = slides
            .first()
            .map(|s| s.title.clone())
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| topic.clone());
        Self {
            id: Uuid::new_v4(),
            title,
            topic,
            style,
            slides,
            created_at: Utc::now(),
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Whole-field title replacement. Returns false when the id is unknown.
    pub fn set_slide_title(&mut self, slide_id: Uuid, title: impl Into<String>) -> bool {
        self.with_slide(slide_id, |s| s.title = title.into())
    }

    /// Whole-field content replacement. Returns false when the id is unknown.
    pub fn set_slide_content(&mut self, slide_id: Uuid, content: impl Into<String>) -> bool {
        self.with_slide(slide_id, |s| s.content = content.into())
    }

    /// Whole-field emoji replacement. Returns false when the id is unknown.
    pub fn set_slide_emoji(&mut self, slide_id: Uuid, emoji: impl Into<String>) -> bool {
        self.with_slide(slide_id, |s| s.emoji = emoji.into())
    }

    /// Appends a blank editable slide and returns its id.
    pub fn add_slide(&mut self) -> Uuid {
        let slide = Slide::new(
            "Новый слайд",
            "• Добавь свой контент здесь",
            "✨",
            SlideLayout::Content,
        );
        let id = slide.id;
        self.slides.push(slide);
        id
    }

    /// Removes a slide by id. Refused when only one slide remains, so the
    /// deck can never become empty.
    pub fn remove_slide(&mut self, slide_id: Uuid) -> bool {
        if self.slides.len() <= 1 {
            return false;
        }
        let before = self.slides.len();
        self.slides.retain(|s| s.id != slide_id);
        self.slides.len() < before
    }

    fn with_slide(&mut self, slide_id: Uuid, apply: impl FnOnce(&mut Slide)) -> bool {
        match self.slides.iter_mut().find(|s| s.id == slide_id) {
            Some(slide) => {
                apply(slide);
                true
            }
            None => false,
        }
    }
}
