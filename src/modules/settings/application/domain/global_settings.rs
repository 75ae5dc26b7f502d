use serde::{Deserialize, Serialize};

use crate::modules::settings::application::ports::outgoing::settings_store::SettingRow;
use crate::shared::codec::decode_or;

// Storage keys. Settings live as one row per key with a JSON-encoded
// value; the public payload uses the same names.
pub const KEY_SITE_NAME: &str = "siteName";
pub const KEY_LOGO: &str = "logo";
pub const KEY_FAVICON: &str = "favicon";
pub const KEY_PRIMARY_COLOR: &str = "primaryColor";
pub const KEY_ACCENT_COLOR: &str = "accentColor";
pub const KEY_BACKGROUND_COLOR: &str = "backgroundColor";
pub const KEY_FOOTER_TEXT: &str = "footerText";
pub const KEY_SOCIAL_LINKS: &str = "socialLinks";
pub const KEY_DEFAULT_SEO_TITLE: &str = "defaultSeoTitle";
pub const KEY_DEFAULT_SEO_DESC: &str = "defaultSeoDesc";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The fully-resolved settings object. Every field is populated: keys
/// absent from storage fall back to the defaults below, so callers never
/// see a partial configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    pub site_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub footer_text: String,
    pub social_links: SocialLinks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_seo_desc: Option<String>,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            site_name: "Portfolio".to_string(),
            logo: None,
            favicon: None,
            primary_color: "#3b82f6".to_string(),
            accent_color: "#8b5cf6".to_string(),
            background_color: "#ffffff".to_string(),
            footer_text: "© 2024 Portfolio. All rights reserved.".to_string(),
            social_links: SocialLinks::default(),
            default_seo_title: None,
            default_seo_desc: None,
        }
    }
}

impl GlobalSettings {
    /// Merge stored rows over the defaults. Each field resolves
    /// independently; a corrupt value degrades to that field's default
    /// without touching the rest.
    pub fn resolve(rows: &[SettingRow]) -> Self {
        let lookup = |key: &str| {
            rows.iter()
                .find(|r| r.key == key)
                .map(|r| r.value.as_str())
        };

        let defaults = GlobalSettings::default();

        Self {
            site_name: decode_or(lookup(KEY_SITE_NAME), defaults.site_name),
            logo: decode_or(lookup(KEY_LOGO), defaults.logo),
            favicon: decode_or(lookup(KEY_FAVICON), defaults.favicon),
            primary_color: decode_or(lookup(KEY_PRIMARY_COLOR), defaults.primary_color),
            accent_color: decode_or(lookup(KEY_ACCENT_COLOR), defaults.accent_color),
            background_color: decode_or(lookup(KEY_BACKGROUND_COLOR), defaults.background_color),
            footer_text: decode_or(lookup(KEY_FOOTER_TEXT), defaults.footer_text),
            social_links: decode_or(lookup(KEY_SOCIAL_LINKS), defaults.social_links),
            default_seo_title: decode_or(lookup(KEY_DEFAULT_SEO_TITLE), defaults.default_seo_title),
            default_seo_desc: decode_or(lookup(KEY_DEFAULT_SEO_DESC), defaults.default_seo_desc),
        }
    }
}

/// A partial settings update. Omitted fields are left untouched in
/// storage; only the provided ones are upserted.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub site_name: Option<String>,
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
    pub background_color: Option<String>,
    pub footer_text: Option<String>,
    pub social_links: Option<SocialLinks>,
    pub default_seo_title: Option<String>,
    pub default_seo_desc: Option<String>,
}

impl SettingsPatch {
    /// Encode the provided fields as (storage key, JSON text) pairs.
    pub fn entries(&self) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
        let mut out = Vec::new();

        fn push<T: serde::Serialize>(
            out: &mut Vec<(&'static str, String)>,
            key: &'static str,
            field: &Option<T>,
        ) -> Result<(), serde_json::Error> {
            if let Some(value) = field {
                out.push((key, crate::shared::codec::encode(value)?));
            }
            Ok(())
        }

        push(&mut out, KEY_SITE_NAME, &self.site_name)?;
        push(&mut out, KEY_LOGO, &self.logo)?;
        push(&mut out, KEY_FAVICON, &self.favicon)?;
        push(&mut out, KEY_PRIMARY_COLOR, &self.primary_color)?;
        push(&mut out, KEY_ACCENT_COLOR, &self.accent_color)?;
        push(&mut out, KEY_BACKGROUND_COLOR, &self.background_color)?;
        push(&mut out, KEY_FOOTER_TEXT, &self.footer_text)?;
        push(&mut out, KEY_SOCIAL_LINKS, &self.social_links)?;
        push(&mut out, KEY_DEFAULT_SEO_TITLE, &self.default_seo_title)?;
        push(&mut out, KEY_DEFAULT_SEO_DESC, &self.default_seo_desc)?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(key: &str, value: &str) -> SettingRow {
        SettingRow {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_resolve_empty_store_yields_defaults() {
        let resolved = GlobalSettings::resolve(&[]);
        assert_eq!(resolved, GlobalSettings::default());
        assert_eq!(resolved.site_name, "Portfolio");
        assert_eq!(resolved.primary_color, "#3b82f6");
        assert_eq!(resolved.accent_color, "#8b5cf6");
        assert_eq!(resolved.background_color, "#ffffff");
        assert_eq!(resolved.footer_text, "© 2024 Portfolio. All rights reserved.");
        assert_eq!(resolved.social_links, SocialLinks::default());
    }

    #[test]
    fn test_resolve_merges_stored_over_defaults() {
        let rows = vec![
            row(KEY_SITE_NAME, "\"My Site\""),
            row(KEY_SOCIAL_LINKS, r#"{"github":"https://github.com/me"}"#),
        ];

        let resolved = GlobalSettings::resolve(&rows);

        assert_eq!(resolved.site_name, "My Site");
        assert_eq!(
            resolved.social_links.github.as_deref(),
            Some("https://github.com/me")
        );
        // Unstored fields keep defaults.
        assert_eq!(resolved.primary_color, "#3b82f6");
    }

    #[test]
    fn test_resolve_corrupt_field_falls_back_alone() {
        let rows = vec![
            row(KEY_SITE_NAME, "{broken"),
            row(KEY_PRIMARY_COLOR, "\"#000000\""),
        ];

        let resolved = GlobalSettings::resolve(&rows);

        assert_eq!(resolved.site_name, "Portfolio");
        assert_eq!(resolved.primary_color, "#000000");
    }

    #[test]
    fn test_patch_entries_skip_omitted_fields() {
        let patch = SettingsPatch {
            site_name: Some("Renamed".to_string()),
            ..Default::default()
        };

        let entries = patch.entries().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, KEY_SITE_NAME);
        assert_eq!(entries[0].1, "\"Renamed\"");
    }

    #[test]
    fn test_serialized_shape_matches_public_contract() {
        let json = serde_json::to_value(GlobalSettings::default()).unwrap();
        assert_eq!(json["siteName"], "Portfolio");
        assert_eq!(json["socialLinks"], serde_json::json!({}));
        assert!(json.get("logo").is_none());
    }
}
