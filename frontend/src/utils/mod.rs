pub mod logging;
pub mod popup;

use std::str::FromStr;

use leptos::logging::{error, warn};
use shared::{ClientConfig, Locale, SessionStorage};
use wasm_bindgen::JsValue;
use web_sys::{Storage, window};

/// Selector of the "Month Year" label the server writes into `index.html`.
/// Left empty, the page opens on the current month.
pub const PERIOD_LABEL_SELECTOR: &str = "[data-period-label]";

pub struct BrowserStorage(Storage);

impl BrowserStorage {
    pub fn local() -> Option<Self> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(BrowserStorage)
    }
}

impl SessionStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Service on the page's own origin, locale from `<html lang>`.
pub fn page_config() -> ClientConfig {
    let Some(window) = window() else {
        return ClientConfig::default();
    };
    let mut config = match window.location().origin() {
        Ok(origin) => ClientConfig::for_origin(origin),
        Err(e) => {
            warn!("Could not read page origin: {}", js_error(e));
            ClientConfig::default()
        }
    };
    let lang = window
        .document()
        .and_then(|doc| doc.document_element())
        .and_then(|html| html.get_attribute("lang"));
    if let Some(locale) = lang
        .as_deref()
        .and_then(|lang| lang.split('-').next())
        .and_then(|code| Locale::from_str(&code.to_lowercase()).ok())
    {
        config.locale = locale;
    }
    config
}

pub fn page_period_label() -> Option<String> {
    let text = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(PERIOD_LABEL_SELECTOR).ok().flatten())
        .and_then(|el| el.text_content());
    period_label(text)
}

fn period_label(text: Option<String>) -> Option<String> {
    text.map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|text| !text.is_empty())
}

pub fn redirect(path: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(path) {
            error!("Failed to redirect to {}: {}", path, js_error(e));
        }
    }
}

/// Blocking page-level message.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.alert_with_message(message) {
            error!("Failed to show alert: {}", js_error(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_label_means_no_label() {
        assert_eq!(period_label(None), None);
        assert_eq!(period_label(Some("   \n ".to_string())), None);
    }

    #[test]
    fn label_whitespace_is_collapsed() {
        assert_eq!(
            period_label(Some("\n    Ottobre\n    2024\n".to_string())),
            Some("Ottobre 2024".to_string())
        );
    }
}
