//! Generation orchestrator: one network attempt, then parse, pad or fall
//! back. The caller always gets exactly the requested number of slides.

use async_trait::async_trait;
use deck_common::{Presentation, PresentationStyle, Slide};
use deck_pollinations::PollinationsClient;

use crate::emoji::EmojiPicker;
use crate::fallback::fallback_slides;
use crate::parser::parse_slides;

/// External text-generation collaborator. One prompt in, free text out.
/// Implementations own transport concerns; the orchestrator owns recovery.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> anyhow::Result<String>;
}

#[async_trait]
impl TextGenerator for PollinationsClient {
    async fn generate_text(&self, prompt: &str) -> anyhow::Result<String> {
        PollinationsClient::generate_text(self, prompt).await
    }
}

/// Builds the natural-language prompt for the external generator: topic,
/// style tone hint, exact slide count and the expected heading format.
pub fn build_prompt(topic: &str, count: usize, style: PresentationStyle) -> String {
    let hint = style.prompt_hint();
    format!(
        "Create a {count}-slide presentation about \"{topic}\". Style: {hint}.\n\n\
         Format EXACTLY like this (use ## for slide titles):\n\
         ## Slide title here\n\
         Content bullet 1\n\
         Content bullet 2\n\
         Content bullet 3\n\n\
         ## Next slide title\n\
         Content here\n\n\
         Generate exactly {count} slides. Write in Russian language. \
         Each slide: 1 clear title + 3-5 content points."
    )
}

/// Runs the single-attempt generation pipeline. Never fails outward:
/// transport errors degrade to a full fallback deck, short parses are padded
/// with fallback slides up to `count`.
pub async fn generate_slides<C>(
    client: &C,
    topic: &str,
    count: usize,
    style: PresentationStyle,
    emoji: &mut EmojiPicker,
) -> Vec<Slide>
where
    C: TextGenerator + ?Sized,
{
    let prompt = build_prompt(topic, count, style);

    match client.generate_text(&prompt).await {
        Ok(text) => {
            let mut slides = parse_slides(&text, count, emoji);
            if slides.len() < count {
                let missing = count - slides.len();
                tracing::debug!(parsed = slides.len(), missing, "padding short parse");
                slides.extend(fallback_slides(missing, emoji));
            }
            slides
        }
        Err(err) => {
            tracing::warn!(%err, "text generation failed, using fallback deck");
            fallback_slides(count, emoji)
        }
    }
}

/// Atomic deck assembly once slides are final. Exposed separately so the
/// caller can hold the slide list until editing starts.
pub fn build_presentation(
    topic: &str,
    style: PresentationStyle,
    slides: Vec<Slide>,
) -> Presentation {
    Presentation::new(topic, style, slides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_common::SlideLayout;

    struct FixedText(String);

    #[async_trait]
    impl TextGenerator for FixedText {
        async fn generate_text(&self, _prompt: &str) -> anyhow::Result<String> {
            Ok(self.0.clone())
        }
    }

    struct AlwaysFails;

    #[async_trait]
    impl TextGenerator for AlwaysFails {
        async fn generate_text(&self, _prompt: &str) -> anyhow::Result<String> {
            anyhow::bail!("http 503")
        }
    }

    fn heading_blocks(n: usize) -> String {
        (1..=n)
            .map(|i| format!("## Раздел {i}\n- тезис {i}\n- детали\n\n"))
            .collect()
    }

    #[test]
    fn prompt_embeds_topic_count_and_style_hint() {
        let prompt = build_prompt("Quarterly Sales Review", 5, PresentationStyle::Corporate);
        assert!(prompt.contains("Quarterly Sales Review"));
        assert!(prompt.contains("5-slide"));
        assert!(prompt.contains(PresentationStyle::Corporate.prompt_hint()));
        assert!(prompt.contains("##"));
    }

    #[tokio::test]
    async fn well_formed_response_yields_requested_slides_in_order() {
        let client = FixedText(heading_blocks(5));
        let mut emoji = EmojiPicker::fixed(0);
        let slides = generate_slides(
            &client,
            "Quarterly Sales Review",
            5,
            PresentationStyle::Corporate,
            &mut emoji,
        )
        .await;
        assert_eq!(slides.len(), 5);
        assert_eq!(slides[0].layout, SlideLayout::Title);
        for (i, slide) in slides.iter().enumerate() {
            assert_eq!(slide.title, format!("Раздел {}", i + 1));
            assert!(slide.content.starts_with("• тезис"));
        }
    }

    #[tokio::test]
    async fn transport_error_degrades_to_full_fallback() {
        let mut emoji = EmojiPicker::fixed(0);
        let slides = generate_slides(
            &AlwaysFails,
            "тема",
            4,
            PresentationStyle::Dark,
            &mut emoji,
        )
        .await;
        assert_eq!(slides.len(), 4);
        assert_eq!(slides[0].title, "Введение");
        assert_eq!(slides[0].layout, SlideLayout::Title);
    }

    #[tokio::test]
    async fn short_parse_is_padded_with_fallback_slides() {
        let client = FixedText(heading_blocks(3));
        let mut emoji = EmojiPicker::fixed(0);
        let slides =
            generate_slides(&client, "тема", 5, PresentationStyle::Minimal, &mut emoji).await;
        assert_eq!(slides.len(), 5);
        assert_eq!(slides[2].title, "Раздел 3");
        assert_eq!(slides[3].title, "Введение");
        assert_eq!(slides[4].title, "Ключевые моменты");
        // The appended fallback block starts its own index count, so its
        // first slide keeps the title tag even mid-deck.
        assert_eq!(slides[3].layout, SlideLayout::Title);
        assert_eq!(slides[4].layout, SlideLayout::Content);
    }

    #[tokio::test]
    async fn unparseable_response_is_replaced_wholesale() {
        let client = FixedText("никаких заголовков, просто поток текста".to_string());
        let mut emoji = EmojiPicker::fixed(0);
        let slides =
            generate_slides(&client, "тема", 3, PresentationStyle::Nature, &mut emoji).await;
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].title, "Введение");
    }

    #[tokio::test]
    async fn presentation_is_assembled_atomically() {
        let client = FixedText(heading_blocks(2));
        let mut emoji = EmojiPicker::fixed(0);
        let slides =
            generate_slides(&client, "тема", 2, PresentationStyle::Creative, &mut emoji).await;
        let deck = build_presentation("тема", PresentationStyle::Creative, slides);
        assert_eq!(deck.title, "Раздел 1");
        assert_eq!(deck.topic, "тема");
        assert_eq!(deck.slide_count(), 2);
    }
}
