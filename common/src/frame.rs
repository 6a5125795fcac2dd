//! Frame metadata served to the embedding platform.
//!
//! Two documents are derived from the same environment-sourced
//! configuration: the manifest published at `/.well-known/farcaster.json`
//! and the page head metadata (title, social preview, `fc:frame` blob).

use std::env;

use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::{
    ACCOUNT_ASSOCIATION_HEADER, ACCOUNT_ASSOCIATION_PAYLOAD, ACCOUNT_ASSOCIATION_SIGNATURE,
    DEFAULT_BASE_URL, PAGE_TITLE,
};

/// Signed proof binding the hosting domain to the operator account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountAssociation {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

impl Default for AccountAssociation {
    fn default() -> Self {
        Self {
            header: ACCOUNT_ASSOCIATION_HEADER.to_owned(),
            payload: ACCOUNT_ASSOCIATION_PAYLOAD.to_owned(),
            signature: ACCOUNT_ASSOCIATION_SIGNATURE.to_owned(),
        }
    }
}

/// Environment-sourced metadata describing the app to the embedding platform.
///
/// Every field except the base URL is optional; absent or empty values are
/// dropped from the serialized documents rather than emitted as nulls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameConfig {
    /// Base URL of the deployment, without trailing slash
    pub base_url: String,
    pub name: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub splash_image_url: Option<String>,
    pub splash_background_color: Option<String>,
    pub primary_category: Option<String>,
    pub hero_image_url: Option<String>,
    pub tagline: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image_url: Option<String>,
    pub frame_image_url: Option<String>,
    pub screenshot_urls: Vec<String>,
    pub tags: Vec<String>,
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

// strip trailing slashes for safe concatenation
fn strip_trailing_slashes(url: &str) -> &str {
    url.trim_end_matches('/')
}

impl FrameConfig {
    pub fn from_env() -> Self {
        let raw_url = env::var("APP_URL").unwrap_or_else(|_| {
            debug!("APP_URL not set, falling back to {}", DEFAULT_BASE_URL);
            DEFAULT_BASE_URL.to_owned()
        });
        Self {
            base_url: strip_trailing_slashes(&raw_url).to_owned(),
            name: env_opt("APP_NAME"),
            subtitle: env_opt("APP_SUBTITLE"),
            description: env_opt("APP_DESCRIPTION"),
            icon_url: env_opt("APP_ICON").or_else(|| env_opt("APP_ICON_URL")),
            splash_image_url: env_opt("APP_SPLASH_IMAGE"),
            splash_background_color: env_opt("APP_SPLASH_BACKGROUND_COLOR"),
            primary_category: env_opt("APP_PRIMARY_CATEGORY"),
            hero_image_url: env_opt("APP_HERO_IMAGE"),
            tagline: env_opt("APP_TAGLINE"),
            og_title: env_opt("APP_OG_TITLE"),
            og_description: env_opt("APP_OG_DESCRIPTION"),
            og_image_url: env_opt("APP_OG_IMAGE"),
            frame_image_url: env_opt("APP_FRAME_IMAGE"),
            screenshot_urls: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn webhook_url(&self) -> String {
        format!("{}/api/webhook", self.base_url)
    }

    /// Image used by the launch frame: dedicated frame image first, then the
    /// hero image, then the social preview image
    pub fn frame_image(&self) -> Option<&str> {
        self.frame_image_url
            .as_deref()
            .or(self.hero_image_url.as_deref())
            .or(self.og_image_url.as_deref())
    }

    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or(PAGE_TITLE)
    }
}

/// Drop every key whose value is absent, an empty string or an empty list;
/// keep all others unchanged.
pub fn with_valid_properties(properties: IndexMap<&'static str, Value>) -> Value {
    let map: serde_json::Map<String, Value> = properties
        .into_iter()
        .filter(|(_, value)| match value {
            Value::Null => false,
            Value::String(text) => !text.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => true,
        })
        .map(|(key, value)| (key.to_owned(), value))
        .collect();
    Value::Object(map)
}

fn frame_properties(config: &FrameConfig) -> Value {
    let mut properties: IndexMap<&'static str, Value> = IndexMap::new();
    properties.insert("version", json!("1"));
    properties.insert("name", json!(config.name));
    properties.insert("subtitle", json!(config.subtitle));
    properties.insert("description", json!(config.description));
    properties.insert("screenshotUrls", json!(config.screenshot_urls));
    properties.insert("iconUrl", json!(config.icon_url));
    properties.insert("splashImageUrl", json!(config.splash_image_url));
    properties.insert("splashBackgroundColor", json!(config.splash_background_color));
    properties.insert("homeUrl", json!(config.base_url));
    properties.insert("webhookUrl", json!(config.webhook_url()));
    properties.insert("primaryCategory", json!(config.primary_category));
    properties.insert("tags", json!(config.tags));
    properties.insert("heroImageUrl", json!(config.hero_image_url));
    properties.insert("tagline", json!(config.tagline));
    properties.insert("ogTitle", json!(config.og_title));
    properties.insert("ogDescription", json!(config.og_description));
    properties.insert("ogImageUrl", json!(config.og_image_url));
    with_valid_properties(properties)
}

/// Build the manifest document served at `/.well-known/farcaster.json`
pub fn manifest(config: &FrameConfig) -> Value {
    json!({
        "accountAssociation": AccountAssociation::default(),
        "frame": frame_properties(config),
    })
}

/// The `fc:frame` blob embedded in the page head, telling the host
/// application how to launch this page inside a frame container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrameEmbed {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub button: FrameButton,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameButton {
    pub title: String,
    pub action: FrameAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FrameAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash_background_color: Option<String>,
}

/// Page head metadata derived from the frame configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
    pub canonical_url: String,
    pub og_image_url: Option<String>,
    pub frame_embed: FrameEmbed,
}

pub fn page_metadata(config: &FrameConfig) -> PageMetadata {
    let title = config.title().to_owned();
    PageMetadata {
        title: title.clone(),
        description: config.og_description.clone(),
        canonical_url: config.base_url.clone(),
        og_image_url: config.og_image_url.clone(),
        frame_embed: FrameEmbed {
            version: "next".to_owned(),
            image_url: config.frame_image().map(str::to_owned),
            button: FrameButton {
                title: format!("Launch {}", title),
                action: FrameAction {
                    kind: "launch_frame".to_owned(),
                    name: title,
                    url: config.base_url.clone(),
                    splash_image_url: config.splash_image_url.clone(),
                    splash_background_color: config.splash_background_color.clone(),
                },
            },
        },
    }
}

fn escape_attribute(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl PageMetadata {
    /// Render the `<title>` and `<meta>` tags embedded by the page handler
    pub fn render_head(&self) -> String {
        let mut head = String::new();
        head.push_str(&format!("<title>{}</title>\n", escape_attribute(&self.title)));
        if let Some(description) = &self.description {
            head.push_str(&format!(
                "<meta name=\"description\" content=\"{}\">\n",
                escape_attribute(description)
            ));
        }
        head.push_str(&format!(
            "<meta property=\"og:title\" content=\"{}\">\n",
            escape_attribute(&self.title)
        ));
        if let Some(description) = &self.description {
            head.push_str(&format!(
                "<meta property=\"og:description\" content=\"{}\">\n",
                escape_attribute(description)
            ));
        }
        head.push_str(&format!(
            "<meta property=\"og:url\" content=\"{}\">\n",
            escape_attribute(&self.canonical_url)
        ));
        head.push_str("<meta property=\"og:type\" content=\"website\">\n");
        if let Some(image) = &self.og_image_url {
            head.push_str(&format!(
                "<meta property=\"og:image\" content=\"{}\">\n",
                escape_attribute(image)
            ));
            head.push_str("<meta name=\"twitter:card\" content=\"summary_large_image\">\n");
            head.push_str(&format!(
                "<meta name=\"twitter:image\" content=\"{}\">\n",
                escape_attribute(image)
            ));
        }
        head.push_str(&format!(
            "<meta name=\"twitter:title\" content=\"{}\">\n",
            escape_attribute(&self.title)
        ));
        let embed = serde_json::to_string(&self.frame_embed)
            .unwrap_or_else(|_| String::from("{}"));
        head.push_str(&format!(
            "<meta name=\"fc:frame\" content=\"{}\">\n",
            escape_attribute(&embed)
        ));
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> FrameConfig {
        FrameConfig {
            base_url: "https://presale.example".to_owned(),
            name: Some("Token Presale".to_owned()),
            description: Some("A presale landing page".to_owned()),
            og_image_url: Some("https://presale.example/og.png".to_owned()),
            splash_background_color: Some("#333A35".to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn filters_empty_values() {
        let mut properties: IndexMap<&'static str, Value> = IndexMap::new();
        properties.insert("kept", json!("value"));
        properties.insert("empty_string", json!(""));
        properties.insert("absent", Value::Null);
        properties.insert("empty_list", Value::Array(Vec::new()));
        properties.insert("list", json!(["a"]));
        properties.insert("number", json!(0));

        let object = with_valid_properties(properties);
        let object = object.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["kept"], json!("value"));
        assert_eq!(object["list"], json!(["a"]));
        // zero is a value, not an empty one
        assert_eq!(object["number"], json!(0));
        assert!(!object.contains_key("empty_string"));
        assert!(!object.contains_key("absent"));
        assert!(!object.contains_key("empty_list"));
    }

    #[test]
    fn manifest_contains_association_and_frame() {
        let document = manifest(&sample_config());
        assert_eq!(
            document["accountAssociation"]["header"],
            json!(ACCOUNT_ASSOCIATION_HEADER)
        );
        let frame = document["frame"].as_object().unwrap();
        assert_eq!(frame["version"], json!("1"));
        assert_eq!(frame["name"], json!("Token Presale"));
        assert_eq!(frame["homeUrl"], json!("https://presale.example"));
        assert_eq!(
            frame["webhookUrl"],
            json!("https://presale.example/api/webhook")
        );
        // unset and empty fields are omitted entirely
        assert!(!frame.contains_key("subtitle"));
        assert!(!frame.contains_key("screenshotUrls"));
        assert!(!frame.contains_key("tags"));
    }

    #[test]
    fn webhook_url_uses_slash_stripped_base() {
        let config = FrameConfig {
            base_url: strip_trailing_slashes("https://presale.example///").to_owned(),
            ..Default::default()
        };
        assert_eq!(config.webhook_url(), "https://presale.example/api/webhook");
    }

    #[test]
    fn frame_image_fallback_order() {
        let mut config = sample_config();
        assert_eq!(config.frame_image(), Some("https://presale.example/og.png"));
        config.hero_image_url = Some("hero.png".to_owned());
        assert_eq!(config.frame_image(), Some("hero.png"));
        config.frame_image_url = Some("frame.png".to_owned());
        assert_eq!(config.frame_image(), Some("frame.png"));
    }

    #[test]
    fn embed_serializes_launch_action() {
        let metadata = page_metadata(&sample_config());
        let embed = serde_json::to_value(&metadata.frame_embed).unwrap();
        assert_eq!(embed["version"], json!("next"));
        assert_eq!(embed["button"]["title"], json!("Launch Token Presale"));
        assert_eq!(embed["button"]["action"]["type"], json!("launch_frame"));
        assert_eq!(
            embed["button"]["action"]["url"],
            json!("https://presale.example")
        );
        // no splash image configured, key is skipped
        assert!(embed["button"]["action"]
            .as_object()
            .unwrap()
            .contains_key("splashBackgroundColor"));
        assert!(!embed["button"]["action"]
            .as_object()
            .unwrap()
            .contains_key("splashImageUrl"));
    }

    #[test]
    fn head_embeds_escaped_frame_blob() {
        let metadata = page_metadata(&sample_config());
        let head = metadata.render_head();
        assert!(head.contains("<title>Token Presale</title>"));
        assert!(head.contains("name=\"fc:frame\""));
        // the JSON blob is attribute-escaped
        assert!(head.contains("&quot;launch_frame&quot;"));
        assert!(!head.contains("content=\"{\""));
    }

    #[test]
    fn from_env_strips_trailing_slashes_and_skips_empties() {
        // no other test touches these variables
        env::set_var("APP_URL", "https://env.example//");
        env::set_var("APP_NAME", "Env Presale");
        env::set_var("APP_SUBTITLE", "");
        let config = FrameConfig::from_env();
        env::remove_var("APP_URL");
        env::remove_var("APP_NAME");
        env::remove_var("APP_SUBTITLE");

        assert_eq!(config.base_url, "https://env.example");
        assert_eq!(config.name.as_deref(), Some("Env Presale"));
        // empty variables behave like absent ones
        assert_eq!(config.subtitle, None);
        assert_eq!(config.webhook_url(), "https://env.example/api/webhook");
    }

    #[test]
    fn missing_name_falls_back_to_page_title() {
        let config = FrameConfig {
            base_url: "https://presale.example".to_owned(),
            ..Default::default()
        };
        let metadata = page_metadata(&config);
        assert_eq!(metadata.title, PAGE_TITLE);
        assert_eq!(metadata.frame_embed.button.title, "Launch TOKEN PRESALE");
    }
}
