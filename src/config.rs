use crate::diagnostics::{log_warn, LogSink};
use serde::{Deserialize, Serialize};

/// Element id of the optional JSON override block in the host page.
pub const CONFIG_ELEMENT_ID: &str = "castdeck-config";

/// Storage key names for the three session entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub source: String,
    pub time: String,
    pub playing: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            source: "audioSrc".to_string(),
            time: "audioTime".to_string(),
            playing: "audioPlaying".to_string(),
        }
    }
}

/// Everything the page features look up in the host markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub burger_selector: String,
    pub menu_selector: String,
    pub menu_visible_class: String,
    pub scroll_container_selector: String,
    pub left_arrow_selector: String,
    pub right_arrow_selector: String,
    pub primary_button_selector: String,
    pub episode_item_selector: String,
    pub episodes_url: String,
    pub recent_limit: usize,
    pub audio_element_id: String,
    pub file_name_element_id: String,
    pub idle_label: String,
    pub audio_folder: String,
    pub source_attribute: String,
    pub storage_keys: StorageKeys,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            burger_selector: ".burger-menu".to_string(),
            menu_selector: ".nav-menu-items".to_string(),
            menu_visible_class: "active".to_string(),
            scroll_container_selector: ".scroll-container".to_string(),
            left_arrow_selector: ".left-arrow".to_string(),
            right_arrow_selector: ".right-arrow".to_string(),
            primary_button_selector: ".button-primary".to_string(),
            episode_item_selector: ".episode-item".to_string(),
            episodes_url: "episodes.html".to_string(),
            recent_limit: 3,
            audio_element_id: "audio-player".to_string(),
            file_name_element_id: "audio-file-name".to_string(),
            idle_label: "No file playing".to_string(),
            audio_folder: "audio/".to_string(),
            source_attribute: "data-src".to_string(),
            storage_keys: StorageKeys::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a partial override. Fields absent from `raw` keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the override block from the current document, falling back to defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load(sink: &dyn LogSink) -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());
        Self::from_raw(raw, sink)
    }

    /// Defaults when `raw` is absent or blank; a malformed block is logged and ignored.
    pub fn from_raw(raw: Option<String>, sink: &dyn LogSink) -> Self {
        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(err) => {
                    log_warn(
                        sink,
                        "config",
                        &format!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}"),
                    );
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}
