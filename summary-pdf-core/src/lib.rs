//! # summary-pdf
//!
//! A minimal, pure Rust writer for one-page PDF summaries with no external PDF
//! dependencies.
//!
//! ## Features
//!
//! - **Greedy layout**: character-count word wrapping with bulleted body lines
//! - **PDF 1.4 output**: catalog, page tree, three standard Type 1 fonts and one
//!   uncompressed content stream, cross-referenced by a classic xref table
//! - **Deterministic**: no timestamps or random identifiers; identical input
//!   gives byte-identical files
//! - **Lossy Latin-1**: characters outside Latin-1 degrade to `?` instead of
//!   failing the document
//!
//! ## Quick Start
//!
//! ```rust
//! use summary_pdf::{Section, SummaryContent, SummaryDocument};
//!
//! let content = SummaryContent::new(
//!     "My App",
//!     vec![Section::new("What it is", ["A small demo application."])],
//!     "Sources: README.md",
//! );
//!
//! let pdf = SummaryDocument::new(content).to_bytes();
//! assert!(pdf.starts_with(b"%PDF-1.4"));
//! assert!(pdf.ends_with(b"%%EOF\n"));
//! ```
//!
//! ## Modules
//!
//! - [`summary`] - Section data fed to the layout
//! - [`text`] - Fonts, wrapping, escaping, encoding and page layout
//! - [`content`] - Content stream rendering
//! - [`objects`] - PDF object model
//! - [`writer`] - Two-phase PDF file encoder
//! - [`document`] - High-level document facade

pub mod content;
pub mod document;
pub mod error;
pub mod objects;
pub mod summary;
pub mod text;
pub mod writer;

pub use content::ContentStream;
pub use document::SummaryDocument;
pub use error::{PdfError, Result};
pub use summary::{Section, SummaryContent};
pub use text::{
    compose, escape_pdf_string, wrap, ContentOp, Font, LayoutStyle, PageGeometry, TextOperation,
};

/// Current version of summary-pdf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
