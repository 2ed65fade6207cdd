//! Content stream rendering
//!
//! Each [`ContentOp`] becomes one line of PDF content-stream operators. Text
//! is wrapped in its own `BT`/`ET` block with an absolute text matrix, so the
//! stream carries no state from one line to the next.

use crate::objects::format_number;
use crate::text::{escape_pdf_string, ContentOp, TextEncoding, TextOperation};
use std::fmt;

/// Rendered page content, one operator group per line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentStream {
    operations: String,
}

impl ContentStream {
    pub fn from_operations(ops: &[ContentOp]) -> Self {
        let mut operations = String::new();
        for op in ops {
            operations.push_str(&render_op(op));
            operations.push('\n');
        }
        Self { operations }
    }

    pub fn as_str(&self) -> &str {
        &self.operations
    }

    /// Encodes the stream with `encoding`, substituting unmappable characters.
    pub fn encode(&self, encoding: TextEncoding) -> Vec<u8> {
        encoding.encode(&self.operations)
    }
}

impl fmt::Display for ContentStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.operations)
    }
}

fn render_op(op: &ContentOp) -> String {
    match op {
        ContentOp::Text(text) => render_text(text),
        ContentOp::Rule { x1, x2, y } => {
            let y = format_number(*y);
            format!(
                "{} {y} m {} {y} l S",
                format_number(*x1),
                format_number(*x2)
            )
        }
    }
}

fn render_text(op: &TextOperation) -> String {
    format!(
        "BT /{} {} Tf 1 0 0 1 {} {} Tm ({}) Tj ET",
        op.font.resource_name(),
        format_number(op.size),
        format_number(op.x),
        format_number(op.y),
        escape_pdf_string(&op.text)
    )
}
