mod encoding;
mod font;
mod layout;
mod wrap;

pub use encoding::TextEncoding;
pub use font::Font;
pub use layout::{compose, ContentOp, LayoutStyle, PageGeometry, TextOperation, TextStyle};
pub use wrap::wrap;

/// Escapes text for use inside a PDF literal string `( ... )`.
///
/// Backslashes are escaped before parentheses so the backslashes inserted for
/// `(` and `)` are not escaped a second time.
pub fn escape_pdf_string(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}
