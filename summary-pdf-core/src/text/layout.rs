//! Single-page layout for summary content
//!
//! Turns a [`SummaryContent`] into an ordered list of [`ContentOp`]s with
//! absolute page coordinates. The vertical cursor is threaded through a fold
//! over the sections; nothing is checked against the bottom margin, the
//! content is assumed to fit on one page.

use crate::summary::{Section, SummaryContent};
use crate::text::{wrap, Font};

/// Page size and margins in PDF user-space units (points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
    /// Margin applied on all four sides
    pub margin: f64,
}

impl PageGeometry {
    /// US Letter (612 x 792 points) with 54-point margins.
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 54.0,
        }
    }

    pub fn left(&self) -> f64 {
        self.margin
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin
    }

    pub fn top(&self) -> f64 {
        self.height - self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

/// Font and size pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub size: f64,
}

impl TextStyle {
    pub const fn new(font: Font, size: f64) -> Self {
        Self { font, size }
    }
}

/// Typographic constants of the summary page.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutStyle {
    pub title: TextStyle,
    /// Advance after the title; the separator rule is drawn at the new cursor
    pub title_gap: f64,
    /// Advance after the separator rule
    pub rule_gap: f64,
    pub heading: TextStyle,
    /// Advance after a section heading
    pub heading_advance: f64,
    pub body: TextStyle,
    /// Advance after every body line, first or continuation
    pub leading: f64,
    /// Extra advance after the last body line of a section
    pub section_gap: f64,
    /// Wrap width in characters
    pub max_chars: usize,
    /// Prefix of the first wrapped line of every body item
    pub bullet: String,
    /// Offset from the left margin of the bulleted line
    pub bullet_indent: f64,
    /// Offset from the left margin of continuation lines
    pub continuation_indent: f64,
    pub footer: TextStyle,
    /// Absolute baseline of the footer
    pub footer_y: f64,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            title: TextStyle::new(Font::HelveticaBold, 16.0),
            title_gap: 20.0,
            rule_gap: 14.0,
            heading: TextStyle::new(Font::HelveticaBold, 11.0),
            heading_advance: 12.0,
            body: TextStyle::new(Font::Helvetica, 9.0),
            leading: 11.0,
            section_gap: 5.0,
            max_chars: 95,
            bullet: "- ".to_string(),
            bullet_indent: 2.0,
            continuation_indent: 14.0,
            footer: TextStyle::new(Font::HelveticaOblique, 8.0),
            footer_y: 24.0,
        }
    }
}

/// One placed line of text. `text` is unescaped.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOperation {
    pub x: f64,
    pub y: f64,
    pub font: Font,
    pub size: f64,
    pub text: String,
}

impl TextOperation {
    fn new(x: f64, y: f64, style: TextStyle, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            font: style.font,
            size: style.size,
            text: text.into(),
        }
    }
}

/// A drawing instruction in reading order.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentOp {
    Text(TextOperation),
    /// Horizontal stroked line from `x1` to `x2` at height `y`
    Rule { x1: f64, x2: f64, y: f64 },
}

impl ContentOp {
    pub fn as_text(&self) -> Option<&TextOperation> {
        match self {
            ContentOp::Text(op) => Some(op),
            ContentOp::Rule { .. } => None,
        }
    }
}

/// Lays out `content` on a single page.
///
/// Emits the title, the separator rule, every section in order and finally
/// the footer at its fixed baseline.
pub fn compose(
    content: &SummaryContent,
    geometry: &PageGeometry,
    style: &LayoutStyle,
) -> Vec<ContentOp> {
    let left = geometry.left();
    let mut ops = Vec::new();

    let mut y = geometry.top();
    ops.push(ContentOp::Text(TextOperation::new(
        left,
        y,
        style.title,
        content.title.as_str(),
    )));
    y -= style.title_gap;
    ops.push(ContentOp::Rule {
        x1: left,
        x2: geometry.right(),
        y,
    });
    y -= style.rule_gap;

    let (mut ops, _) = content
        .sections
        .iter()
        .fold((ops, y), |(ops, y), section| layout_section(ops, y, section, left, style));

    ops.push(ContentOp::Text(TextOperation::new(
        left,
        style.footer_y,
        style.footer,
        content.footer.as_str(),
    )));
    ops
}

fn layout_section(
    mut ops: Vec<ContentOp>,
    y: f64,
    section: &Section,
    left: f64,
    style: &LayoutStyle,
) -> (Vec<ContentOp>, f64) {
    ops.push(ContentOp::Text(TextOperation::new(
        left,
        y,
        style.heading,
        section.title.as_str(),
    )));
    let y = y - style.heading_advance;

    let (ops, y) = section
        .body_lines
        .iter()
        .fold((ops, y), |(ops, y), item| layout_item(ops, y, item, left, style));

    (ops, y - style.section_gap)
}

fn layout_item(
    mut ops: Vec<ContentOp>,
    mut y: f64,
    item: &str,
    left: f64,
    style: &LayoutStyle,
) -> (Vec<ContentOp>, f64) {
    let mut lines = wrap(item, style.max_chars).into_iter();
    let Some(first) = lines.next() else {
        return (ops, y);
    };

    ops.push(ContentOp::Text(TextOperation::new(
        left + style.bullet_indent,
        y,
        style.body,
        format!("{}{}", style.bullet, first),
    )));
    y -= style.leading;

    for line in lines {
        ops.push(ContentOp::Text(TextOperation::new(
            left + style.continuation_indent,
            y,
            style.body,
            line,
        )));
        y -= style.leading;
    }

    (ops, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(ops: &[ContentOp]) -> Vec<&TextOperation> {
        ops.iter().filter_map(ContentOp::as_text).collect()
    }

    fn single_section(lines: &[&str]) -> SummaryContent {
        SummaryContent::new(
            "Title",
            vec![Section::new("Test", lines.iter().copied())],
            "F",
        )
    }

    #[test]
    fn test_letter_geometry() {
        let geometry = PageGeometry::letter();
        assert_eq!(geometry.left(), 54.0);
        assert_eq!(geometry.right(), 558.0);
        assert_eq!(geometry.top(), 738.0);
        assert_eq!(PageGeometry::default(), geometry);
    }

    #[test]
    fn test_title_and_rule_come_first() {
        let ops = compose(
            &single_section(&[]),
            &PageGeometry::letter(),
            &LayoutStyle::default(),
        );

        let title = ops[0].as_text().unwrap();
        assert_eq!((title.x, title.y), (54.0, 738.0));
        assert_eq!(title.font, Font::HelveticaBold);
        assert_eq!(title.size, 16.0);
        assert_eq!(title.text, "Title");

        assert_eq!(
            ops[1],
            ContentOp::Rule {
                x1: 54.0,
                x2: 558.0,
                y: 718.0
            }
        );
    }

    #[test]
    fn test_heading_and_bullet_positions() {
        let ops = compose(
            &single_section(&["short line"]),
            &PageGeometry::letter(),
            &LayoutStyle::default(),
        );
        let texts = texts(&ops);

        let heading = texts[1];
        assert_eq!((heading.x, heading.y), (54.0, 704.0));
        assert_eq!((heading.font, heading.size), (Font::HelveticaBold, 11.0));

        let bullet = texts[2];
        assert_eq!(bullet.text, "- short line");
        assert_eq!((bullet.x, bullet.y), (56.0, 692.0));
        assert_eq!((bullet.font, bullet.size), (Font::Helvetica, 9.0));
    }

    #[test]
    fn test_continuation_lines_use_deeper_indent() {
        let long = "word ".repeat(40);
        let ops = compose(
            &single_section(&[long.as_str()]),
            &PageGeometry::letter(),
            &LayoutStyle::default(),
        );
        let body: Vec<_> = texts(&ops)
            .into_iter()
            .filter(|op| op.font == Font::Helvetica)
            .collect();

        // 40 four-letter words wrap as 19 + 19 + 2 at 95 characters
        assert_eq!(body.len(), 3);
        assert!(body[0].text.starts_with("- word"));
        assert_eq!(body[0].x, 56.0);
        assert_eq!(body[1].x, 68.0);
        assert_eq!(body[2].x, 68.0);
        assert!(!body[1].text.starts_with("- "));
        assert_eq!(body[0].y - body[1].y, 11.0);
        assert_eq!(body[1].y - body[2].y, 11.0);
    }

    #[test]
    fn test_blank_body_lines_are_skipped() {
        let ops = compose(
            &single_section(&["   ", "kept"]),
            &PageGeometry::letter(),
            &LayoutStyle::default(),
        );
        let texts = texts(&ops);
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[2].text, "- kept");
        assert_eq!(texts[2].y, 692.0);
    }

    #[test]
    fn test_section_gap_between_sections() {
        let content = SummaryContent::new(
            "Title",
            vec![
                Section::new("One", ["a"]),
                Section::new("Two", ["b", "c"]),
            ],
            "F",
        );
        let ops = compose(&content, &PageGeometry::letter(), &LayoutStyle::default());
        let texts = texts(&ops);

        let ys: Vec<_> = texts.iter().map(|op| op.y).collect();
        // title, One, a, Two, b, c, footer
        assert_eq!(ys, vec![738.0, 704.0, 692.0, 676.0, 664.0, 653.0, 24.0]);
    }

    #[test]
    fn test_footer_is_fixed_regardless_of_content() {
        let geometry = PageGeometry::letter();
        let style = LayoutStyle::default();
        let few = compose(&single_section(&["x"]), &geometry, &style);
        let many = compose(&single_section(&["line"; 20]), &geometry, &style);

        for ops in [&few, &many] {
            let footer = ops.last().and_then(ContentOp::as_text).unwrap();
            assert_eq!((footer.x, footer.y), (54.0, 24.0));
            assert_eq!((footer.font, footer.size), (Font::HelveticaOblique, 8.0));
            assert_eq!(footer.text, "F");
        }
    }

    #[test]
    fn test_custom_geometry_moves_everything() {
        let geometry = PageGeometry {
            width: 400.0,
            height: 500.0,
            margin: 20.0,
        };
        let ops = compose(&single_section(&["x"]), &geometry, &LayoutStyle::default());
        let origin = ops[0].as_text().map(|op| (op.x, op.y));
        assert_eq!(origin, Some((20.0, 480.0)));
        assert_eq!(
            ops[1],
            ContentOp::Rule {
                x1: 20.0,
                x2: 380.0,
                y: 460.0
            }
        );
    }

    #[test]
    fn test_operations_are_in_reading_order() {
        let ops = compose(
            &SummaryContent::needl(),
            &PageGeometry::letter(),
            &LayoutStyle::default(),
        );
        let texts = texts(&ops);
        let flowing = &texts[..texts.len() - 1];
        assert!(flowing.windows(2).all(|pair| pair[0].y > pair[1].y));
        assert!(flowing.last().unwrap().y > 54.0);
    }
}
