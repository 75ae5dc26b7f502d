use serde::{Deserialize, Serialize};

use crate::shared::codec::newline_list;

//
// ──────────────────────────────────────────────────────────
// Section payloads
// ──────────────────────────────────────────────────────────
//

/// Hero block payload. `subtitles` accepts either a JSON array or the
/// newline-delimited textarea form the admin submits; entries are trimmed
/// and blanks dropped, input order preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroData {
    pub title: String,
    #[serde(deserialize_with = "newline_list")]
    pub subtitles: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CtaData {
    pub title: String,
    pub text: String,
    pub cta_text: String,
    pub cta_link: String,
}

/// Blocks whose content is sourced entirely from their entity repository
/// carry no payload of their own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyData {}

//
// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────
//

/// Tag-dispatched section body. The wire shape is `{"type": ..., "data":
/// ...}`; each tag owns its payload type, so consumers never cast an open
/// bag. Tags from newer content models fall into `Unknown` and are
/// skipped by resolution instead of failing the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum SectionBody {
    Hero(HeroData),
    FeaturedProjects(EmptyData),
    AboutPreview(EmptyData),
    Skills(EmptyData),
    ExperiencePreview(EmptyData),
    Blogs(EmptyData),
    Cta(CtaData),
    Custom(serde_json::Value),
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl SectionBody {
    pub fn is_unknown(&self) -> bool {
        matches!(self, SectionBody::Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(flatten)]
    pub body: SectionBody,
}

fn enabled_default() -> bool {
    true
}

/// A page's stored content blob. Decodes with fallback `{sections: []}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub sections: Vec<Section>,
}

impl PageContent {
    /// Sections in display form: enabled only, stable-sorted by ascending
    /// order, unknown tags dropped.
    pub fn resolve_sections(&self) -> Vec<Section> {
        let mut resolved: Vec<Section> = self
            .sections
            .iter()
            .filter(|s| s.enabled && !s.body.is_unknown())
            .cloned()
            .collect();
        resolved.sort_by_key(|s| s.order);
        resolved
    }

    /// The resolved content, for public page payloads.
    pub fn resolved(&self) -> PageContent {
        PageContent {
            sections: self.resolve_sections(),
        }
    }
}
