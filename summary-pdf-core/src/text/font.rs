use crate::objects::ObjectId;

/// Standard Type 1 fonts available to the summary page.
///
/// Standard fonts are guaranteed to be available in all PDF readers and are
/// never embedded. Each font has a fixed resource name on the page and a fixed
/// indirect object number in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Helvetica (body text), resource `F1`
    Helvetica,
    /// Helvetica Bold (title and headings), resource `F2`
    HelveticaBold,
    /// Helvetica Oblique (footer), resource `F3`
    HelveticaOblique,
}

impl Font {
    /// All page fonts in resource order.
    pub const ALL: [Font; 3] = [Font::Helvetica, Font::HelveticaBold, Font::HelveticaOblique];

    /// Get the PDF base font name for this font
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    /// Name under which the page's resource dictionary refers to this font
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaOblique => "F3",
        }
    }

    /// Indirect object holding this font's dictionary
    pub fn object_id(&self) -> ObjectId {
        let number = match self {
            Font::Helvetica => 4,
            Font::HelveticaBold => 5,
            Font::HelveticaOblique => 6,
        };
        ObjectId::new(number, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_names() {
        assert_eq!(Font::Helvetica.pdf_name(), "Helvetica");
        assert_eq!(Font::HelveticaBold.pdf_name(), "Helvetica-Bold");
        assert_eq!(Font::HelveticaOblique.pdf_name(), "Helvetica-Oblique");
    }

    #[test]
    fn test_resource_names_follow_object_order() {
        let resources: Vec<_> = Font::ALL.iter().map(Font::resource_name).collect();
        assert_eq!(resources, vec!["F1", "F2", "F3"]);

        let numbers: Vec<_> = Font::ALL.iter().map(|f| f.object_id().number()).collect();
        assert_eq!(numbers, vec![4, 5, 6]);
    }
}
