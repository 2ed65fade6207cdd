//! Summary content fed to the layout engine.
//!
//! A [`SummaryContent`] is plain data: a document title, an ordered list of
//! [`Section`]s and a one-line footer. The built-in Needl summary is available
//! through [`SummaryContent::needl`]; with the `serde` feature any other
//! summary can be loaded from JSON.

#[cfg(feature = "serde")]
use crate::error::Result;

/// A titled group of body lines. Each body line becomes one bullet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub title: String,
    pub body_lines: Vec<String>,
}

impl Section {
    pub fn new<I, S>(title: impl Into<String>, body_lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            body_lines: body_lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// Everything that ends up on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryContent {
    pub title: String,
    pub sections: Vec<Section>,
    pub footer: String,
}

impl SummaryContent {
    pub fn new(
        title: impl Into<String>,
        sections: Vec<Section>,
        footer: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            sections,
            footer: footer.into(),
        }
    }

    /// Parses summary content from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::InvalidContent`](crate::error::PdfError::InvalidContent)
    /// if the JSON does not describe a summary.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON summary file.
    #[cfg(feature = "serde")]
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The shipped one-page summary of the Needl app.
    pub fn needl() -> Self {
        Self::new(
            "Needl App Summary (Repo-Based)",
            vec![
                Section::new(
                    "What it is",
                    [
                        "Needl is a Flutter app for tracking vinyl collections, including owned and wanted albums.",
                        "It uses Supabase for auth/data and includes Discogs and Spotify integrations.",
                    ],
                ),
                Section::new(
                    "Who it's for",
                    [
                        "Primary persona: Not found in repo.",
                        "Inferred from README and features: vinyl record collectors managing owned/wanted albums.",
                    ],
                ),
                Section::new(
                    "What it does",
                    [
                        "Auth-gated app flow with Supabase Auth (email/password and Apple OAuth method).",
                        "Stores and manages owned/wanted albums in Supabase with per-user RLS policies.",
                        "Artist-based browsing/search with sort options, add/delete actions, and sync refresh.",
                        "Fetches cover art via spotify-token Edge Function plus Spotify Web API search.",
                        "Supports Discogs OAuth 1.0a connect flow, release search, and collection add/remove.",
                        "Shows Sync Status and differences between Needl remote data and Discogs collection.",
                        "Falls back to local JSON snapshot when Supabase is unavailable (offline read mode).",
                    ],
                ),
                Section::new(
                    "How it works",
                    [
                        "Flutter UI in lib/ calls service layer (DataRepository, AuthService, DiscogsService).",
                        "DataRepository loads Supabase first, caches in memory, and persists needl_snapshot.json.",
                        "Write operations call SupabaseDataService, then refresh cache and save a new snapshot.",
                        "Supabase tables: profiles, owned_albums, wanted_albums, discogs_tokens, discogs_oauth_temp.",
                        "Supabase Edge Functions: spotify-token, discogs-request-token, discogs-access-token, discogs-api.",
                    ],
                ),
                Section::new(
                    "How to run (minimal)",
                    [
                        "Create lib/config.dart from lib/config.dart.default and fill Supabase + Spotify values.",
                        "Run flutter pub get",
                        "Run flutter run",
                        "Edge Function deployment commands beyond required env vars: Not found in repo.",
                    ],
                ),
            ],
            "Sources: README.md, lib/main.dart, lib/services/*, lib/*_view.dart, supabase/migrations, supabase/functions",
        )
    }
}

impl Default for SummaryContent {
    fn default() -> Self {
        Self::needl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_new_collects_lines() {
        let section = Section::new("Test", ["one", "two"]);
        assert_eq!(section.title, "Test");
        assert_eq!(section.body_lines, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_needl_summary_shape() {
        let content = SummaryContent::needl();
        assert_eq!(content.title, "Needl App Summary (Repo-Based)");
        let titles: Vec<_> = content.sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "What it is",
                "Who it's for",
                "What it does",
                "How it works",
                "How to run (minimal)"
            ]
        );
        assert_eq!(content.sections[2].body_lines.len(), 7);
        assert!(content.footer.starts_with("Sources: README.md"));
    }

    #[test]
    fn test_default_is_needl() {
        assert_eq!(SummaryContent::default(), SummaryContent::needl());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let json = r#"{
            "title": "Demo",
            "sections": [{ "title": "Test", "body_lines": ["short line"] }],
            "footer": "F"
        }"#;
        let content = SummaryContent::from_json(json).unwrap();
        assert_eq!(
            content,
            SummaryContent::new("Demo", vec![Section::new("Test", ["short line"])], "F")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_rejects_wrong_shape() {
        let json = r#"{ "title": "Demo", "sections": [{ "title": "T", "body_lines": "x" }], "footer": "" }"#;
        let err = SummaryContent::from_json(json).unwrap_err();
        assert!(matches!(err, crate::error::PdfError::InvalidContent(_)));
    }
}
