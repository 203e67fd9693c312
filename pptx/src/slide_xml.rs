//! Per-slide DrawingML rendering with two fixed visual templates.
//!
//! The slide at index 0 is always rendered with the title template,
//! regardless of its stored layout tag. For every other index the stored
//! tag decides. Reordering slides can therefore change rendering without
//! any tag edit; that quirk is part of the product behavior and covered by
//! tests.

use deck_common::{Slide, SlideLayout, StylePalette};

/// Widescreen canvas, 13.333 x 7.5 inches.
pub const SLIDE_W_EMU: i64 = 12_192_000;
pub const SLIDE_H_EMU: i64 = 6_858_000;

const EMU_PER_INCH: f64 = 914_400.0;

fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Alpha in thousandths of a percent, or `None` for fully opaque.
fn srgb(hex: &str, alpha: Option<u32>) -> String {
    match alpha {
        Some(a) => format!("<a:srgbClr val=\"{hex}\"><a:alpha val=\"{a}\"/></a:srgbClr>"),
        None => format!("<a:srgbClr val=\"{hex}\"/>"),
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    fn attr(self) -> &'static str {
        match self {
            Align::Left => "",
            Align::Center => " algn=\"ctr\"",
            Align::Right => " algn=\"r\"",
        }
    }
}

struct TextStyle<'a> {
    size_pt: u32,
    bold: bool,
    color: &'a str,
    alpha: Option<u32>,
    align: Align,
}

fn run_props(style: &TextStyle<'_>) -> String {
    format!(
        "<a:rPr lang=\"ru-RU\" sz=\"{}\"{} dirty=\"0\"><a:solidFill>{}</a:solidFill><a:latin typeface=\"Arial\"/></a:rPr>",
        style.size_pt * 100,
        if style.bold { " b=\"1\"" } else { "" },
        srgb(style.color, style.alpha)
    )
}

fn paragraph(text: &str, style: &TextStyle<'_>) -> String {
    format!(
        "<a:p><a:pPr{}/><a:r>{}<a:t>{}</a:t></a:r></a:p>",
        style.align.attr(),
        run_props(style),
        escape_xml(text)
    )
}

/// One bulleted paragraph with 1.5 line spacing.
fn bullet_paragraph(text: &str, style: &TextStyle<'_>) -> String {
    format!(
        "<a:p><a:pPr marL=\"285750\" indent=\"-285750\"><a:lnSpc><a:spcPct val=\"150000\"/></a:lnSpc><a:buChar char=\"\u{2022}\"/></a:pPr><a:r>{}<a:t>{}</a:t></a:r></a:p>",
        run_props(style),
        escape_xml(text)
    )
}

/// Solid-filled borderless rectangle.
fn rect_shape(id: u32, name: &str, x: i64, y: i64, cx: i64, cy: i64, fill: &str) -> String {
    format!(
        "<p:sp><p:nvSpPr><p:cNvPr id=\"{id}\" name=\"{name}\"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>\
         <p:spPr><a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom>\
         <a:solidFill>{fill}</a:solidFill><a:ln><a:noFill/></a:ln></p:spPr>\
         <p:txBody><a:bodyPr/><a:lstStyle/><a:p/></p:txBody></p:sp>"
    )
}

/// Unfilled text box holding pre-rendered paragraphs.
fn text_shape(id: u32, name: &str, x: i64, y: i64, cx: i64, cy: i64, paragraphs: &str) -> String {
    format!(
        "<p:sp><p:nvSpPr><p:cNvPr id=\"{id}\" name=\"{name}\"/><p:cNvSpPr txBox=\"1\"/><p:nvPr/></p:nvSpPr>\
         <p:spPr><a:xfrm><a:off x=\"{x}\" y=\"{y}\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>\
         <a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom><a:noFill/></p:spPr>\
         <p:txBody><a:bodyPr wrap=\"square\" rtlCol=\"0\"/><a:lstStyle/>{paragraphs}</p:txBody></p:sp>"
    )
}

/// Strips a single leading bullet marker the way the editor displays lines.
fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix(['•', '-', '*'])
        .map(str::trim_start)
        .unwrap_or(line)
}

fn footer(id: u32, index: usize, total: usize, text_color: &str) -> String {
    let style = TextStyle {
        size_pt: 10,
        bold: false,
        color: text_color,
        alpha: Some(40_000),
        align: Align::Right,
    };
    text_shape(
        id,
        "PageIndicator",
        0,
        emu(5.1),
        SLIDE_W_EMU,
        emu(0.4),
        &paragraph(&format!("{} / {}", index + 1, total), &style),
    )
}

fn render_title_slide(slide: &Slide, index: usize, total: usize, palette: &StylePalette) -> String {
    let mut shapes = String::new();

    shapes.push_str(&rect_shape(
        2,
        "Background",
        0,
        0,
        SLIDE_W_EMU,
        SLIDE_H_EMU,
        &srgb(palette.background, None),
    ));
    shapes.push_str(&rect_shape(
        3,
        "AccentDivider",
        0,
        emu(2.5),
        SLIDE_W_EMU,
        emu(0.05),
        &srgb(palette.accent, None),
    ));

    let emoji_style = TextStyle {
        size_pt: 40,
        bold: false,
        color: palette.text,
        alpha: None,
        align: Align::Center,
    };
    let glyph = if slide.emoji.is_empty() {
        "🎯"
    } else {
        slide.emoji.as_str()
    };
    shapes.push_str(&text_shape(
        4,
        "Emoji",
        emu(3.5),
        emu(0.8),
        emu(6.5),
        emu(1.0),
        &paragraph(glyph, &emoji_style),
    ));

    let title_style = TextStyle {
        size_pt: 36,
        bold: true,
        color: palette.text,
        alpha: None,
        align: Align::Center,
    };
    shapes.push_str(&text_shape(
        5,
        "Title",
        emu(0.5),
        emu(1.8),
        emu(12.0),
        emu(1.5),
        &paragraph(&slide.title, &title_style),
    ));

    // Only the first content line makes it onto a title slide.
    if let Some(first_line) = slide.content_lines().next() {
        let subtitle_style = TextStyle {
            size_pt: 18,
            bold: false,
            color: palette.text,
            alpha: Some(80_000),
            align: Align::Center,
        };
        shapes.push_str(&text_shape(
            6,
            "Subtitle",
            emu(1.0),
            emu(3.4),
            emu(11.0),
            emu(1.0),
            &paragraph(first_line, &subtitle_style),
        ));
    }

    shapes.push_str(&footer(7, index, total, palette.text));
    wrap_slide(palette.background, &shapes)
}

fn render_content_slide(
    slide: &Slide,
    index: usize,
    total: usize,
    palette: &StylePalette,
) -> String {
    let mut shapes = String::new();

    shapes.push_str(&rect_shape(
        2,
        "AccentBar",
        0,
        0,
        emu(0.1),
        SLIDE_H_EMU,
        &srgb(palette.accent, None),
    ));

    if !slide.emoji.is_empty() {
        let emoji_style = TextStyle {
            size_pt: 20,
            bold: false,
            color: palette.text,
            alpha: None,
            align: Align::Left,
        };
        shapes.push_str(&text_shape(
            3,
            "Emoji",
            emu(0.3),
            emu(0.3),
            emu(0.8),
            emu(0.6),
            &paragraph(&slide.emoji, &emoji_style),
        ));
    }

    let title_style = TextStyle {
        size_pt: 26,
        bold: true,
        color: palette.text,
        alpha: None,
        align: Align::Left,
    };
    shapes.push_str(&text_shape(
        4,
        "Title",
        emu(0.3),
        emu(0.7),
        emu(12.2),
        emu(0.8),
        &paragraph(&slide.title, &title_style),
    ));

    shapes.push_str(&rect_shape(
        5,
        "HeaderDivider",
        emu(0.3),
        emu(1.55),
        emu(12.2),
        emu(0.03),
        &srgb(palette.accent, Some(27_000)),
    ));

    let bullet_style = TextStyle {
        size_pt: 16,
        bold: false,
        color: palette.text,
        alpha: Some(87_000),
        align: Align::Left,
    };
    let bullets: String = slide
        .content_lines()
        .map(strip_bullet)
        .filter(|l| !l.is_empty())
        .map(|l| bullet_paragraph(l, &bullet_style))
        .collect();
    if !bullets.is_empty() {
        shapes.push_str(&text_shape(
            6,
            "Bullets",
            emu(0.5),
            emu(1.8),
            emu(12.0),
            emu(3.5),
            &bullets,
        ));
    }

    shapes.push_str(&footer(7, index, total, palette.text));
    wrap_slide(palette.background, &shapes)
}

fn wrap_slide(background: &str, shapes: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
         <p:sld xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
         xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
         xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\">\
         <p:cSld>\
         <p:bg><p:bgPr><a:solidFill>{}</a:solidFill><a:effectLst/></p:bgPr></p:bg>\
         <p:spTree>\
         <p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
         <p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>\
         <a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>\
         {shapes}\
         </p:spTree>\
         </p:cSld>\
         <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
         </p:sld>",
        srgb(background, None)
    )
}

/// Renders one slide part. `index` is the slide's position in the deck;
/// position 0 forces the title template.
pub fn render_slide(slide: &Slide, index: usize, total: usize, palette: &StylePalette) -> String {
    let title_layout = index == 0 || slide.layout == SlideLayout::Title;
    if title_layout {
        render_title_slide(slide, index, total, palette)
    } else {
        render_content_slide(slide, index, total, palette)
    }
}
