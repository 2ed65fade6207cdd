use crate::content::ContentStream;
use crate::error::Result;
use crate::summary::SummaryContent;
use crate::text::{compose, ContentOp, LayoutStyle, PageGeometry, TextEncoding};
use crate::writer::{encode_page, PdfWriter};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// A one-page summary document.
///
/// Holds the content to lay out together with the page geometry and layout
/// style. Generation is deterministic: the same inputs always produce the
/// same bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryDocument {
    content: SummaryContent,
    geometry: PageGeometry,
    style: LayoutStyle,
    encoding: TextEncoding,
}

impl SummaryDocument {
    /// Creates a US Letter document with the default layout style.
    pub fn new(content: SummaryContent) -> Self {
        Self {
            content,
            geometry: PageGeometry::default(),
            style: LayoutStyle::default(),
            encoding: TextEncoding::default(),
        }
    }

    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_style(mut self, style: LayoutStyle) -> Self {
        self.style = style;
        self
    }

    pub fn content(&self) -> &SummaryContent {
        &self.content
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Positioned drawing operations in reading order.
    pub fn operations(&self) -> Vec<ContentOp> {
        compose(&self.content, &self.geometry, &self.style)
    }

    pub fn content_stream(&self) -> ContentStream {
        ContentStream::from_operations(&self.operations())
    }

    /// Encodes the complete PDF file in memory.
    pub fn to_bytes(&self) -> Vec<u8> {
        let content = self.content_stream().encode(self.encoding);
        encode_page(&content, &self.geometry)
    }

    /// Writes the PDF to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let content = self.content_stream().encode(self.encoding);
        PdfWriter::new_with_writer(writer).write_page(&content, &self.geometry)
    }

    /// Saves the PDF to `path`, creating missing parent directories and
    /// replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or the file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let content = self.content_stream().encode(self.encoding);
        let mut writer = PdfWriter::new(path)?;
        writer.write_page(&content, &self.geometry)?;

        info!(
            path = %path.display(),
            bytes = writer.bytes_written(),
            "saved summary PDF"
        );
        Ok(())
    }
}

impl Default for SummaryDocument {
    fn default() -> Self {
        Self::new(SummaryContent::default())
    }
}
