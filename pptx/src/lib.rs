//! Deck export serializer: turns a finished `Presentation` into a .pptx
//! file (an OPC package: a ZIP archive of XML parts, one slide part per
//! slide). Output is deterministic for an unmutated presentation.

mod error;
mod package;
mod parts;
mod slide_xml;

pub use error::ExportError;
pub use package::{export_pptx, export_to_file, sanitize_title, PRODUCT_NAME};
