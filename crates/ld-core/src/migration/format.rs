use serde::{Deserialize, Serialize};

/// Exporter whose output is being imported.
///
/// Chosen by which upload control the user picked; immutable afterwards.
/// The serde names are the wire tags the import endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MigrationFormat {
    #[serde(rename = "linkwarden")]
    Linkwarden,
    #[serde(rename = "htmlFile")]
    HtmlFile,
    #[serde(rename = "wallabag")]
    Wallabag,
    #[serde(rename = "omnivore")]
    Omnivore,
}

impl MigrationFormat {
    pub const ALL: [MigrationFormat; 4] = [
        MigrationFormat::Linkwarden,
        MigrationFormat::HtmlFile,
        MigrationFormat::Wallabag,
        MigrationFormat::Omnivore,
    ];

    /// Wire tag sent to the import endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            MigrationFormat::Linkwarden => "linkwarden",
            MigrationFormat::HtmlFile => "htmlFile",
            MigrationFormat::Wallabag => "wallabag",
            MigrationFormat::Omnivore => "omnivore",
        }
    }

    /// File extension the upload control for this format accepts.
    pub fn accepted_extension(&self) -> &'static str {
        match self {
            MigrationFormat::Linkwarden => ".json",
            MigrationFormat::HtmlFile => ".html",
            MigrationFormat::Wallabag => ".json",
            MigrationFormat::Omnivore => ".zip",
        }
    }
}

impl std::fmt::Display for MigrationFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
