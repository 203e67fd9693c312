//! OPC package assembly: ZIP archive plumbing plus the part manifest for a
//! complete single-master presentation.

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use deck_common::Presentation;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::ExportError;
use crate::{parts, slide_xml};

/// Fixed author/application name stamped into document properties.
pub const PRODUCT_NAME: &str = "SlideAI";

/// In-memory ZIP builder for package parts.
struct PackageWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PackageWriter {
    fn new() -> Self {
        // A pinned modification time keeps repeated exports byte-identical.
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options,
        }
    }

    fn add_part(&mut self, name: &str, content: &str) -> Result<(), ExportError> {
        self.zip.start_file(name, self.options)?;
        self.zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        Ok(self.zip.finish()?.into_inner())
    }
}

/// Serializes a presentation into .pptx bytes. Pure function of the
/// presentation and its style palette.
pub fn export_pptx(presentation: &Presentation) -> Result<Vec<u8>, ExportError> {
    let palette = presentation.style.palette();
    let total = presentation.slides.len();

    let mut writer = PackageWriter::new();
    writer.add_part("[Content_Types].xml", &parts::content_types(total))?;
    writer.add_part("_rels/.rels", &parts::root_rels())?;
    writer.add_part("docProps/core.xml", &parts::core_props(&presentation.title))?;
    writer.add_part("docProps/app.xml", &parts::app_props(total))?;
    writer.add_part("ppt/presentation.xml", &parts::presentation(total))?;
    writer.add_part(
        "ppt/_rels/presentation.xml.rels",
        &parts::presentation_rels(total),
    )?;
    writer.add_part("ppt/slideMasters/slideMaster1.xml", &parts::slide_master())?;
    writer.add_part(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &parts::slide_master_rels(),
    )?;
    writer.add_part("ppt/slideLayouts/slideLayout1.xml", &parts::slide_layout())?;
    writer.add_part(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        &parts::slide_layout_rels(),
    )?;
    writer.add_part("ppt/theme/theme1.xml", &parts::theme())?;

    for (index, slide) in presentation.slides.iter().enumerate() {
        let xml = slide_xml::render_slide(slide, index, total, &palette);
        writer.add_part(&format!("ppt/slides/slide{}.xml", index + 1), &xml)?;
        writer.add_part(
            &format!("ppt/slides/_rels/slide{}.xml.rels", index + 1),
            &parts::slide_rels(),
        )?;
    }

    tracing::debug!(slides = total, "pptx package assembled");
    writer.finish()
}

/// Exports into `dir` under a filename derived from the presentation title.
/// Returns the written path.
pub fn export_to_file(
    presentation: &Presentation,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let bytes = export_pptx(presentation)?;
    let path = dir.join(format!("{}.pptx", sanitize_title(&presentation.title)));
    std::fs::write(&path, &bytes)?;
    Ok(path)
}

/// Derives a filename base from a title: letters (Latin or Cyrillic), digits
/// and whitespace survive, whitespace runs collapse to one `_`, and an empty
/// result falls back to a fixed default.
pub fn sanitize_title(title: &str) -> String {
    let kept: String = title.chars().filter(|c| is_allowed(*c)).collect();
    let base = kept.split_whitespace().collect::<Vec<_>>().join("_");
    if base.is_empty() {
        "presentation".to_string()
    } else {
        base
    }
}

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || ('а'..='я').contains(&c)
        || ('А'..='Я').contains(&c)
        || c == 'ё'
        || c == 'Ё'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyrillic_title_is_sanitized() {
        assert_eq!(sanitize_title("Продажи 2025!!!"), "Продажи_2025");
    }

    #[test]
    fn whitespace_runs_collapse_to_one_separator() {
        assert_eq!(sanitize_title("a   b\t c"), "a_b_c");
    }

    #[test]
    fn stripped_out_title_falls_back_to_default() {
        assert_eq!(sanitize_title("!!! ???"), "presentation");
        assert_eq!(sanitize_title(""), "presentation");
    }

    #[test]
    fn mixed_alphabets_survive() {
        assert_eq!(sanitize_title("Review: Продажи Q3"), "Review_Продажи_Q3");
    }
}
