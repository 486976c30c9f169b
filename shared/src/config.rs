use serde::Deserialize;
use strum_macros::{Display, EnumString};

pub const DEFAULT_LOGIN_PATH: &str = "/login.html";
pub const USER_ID_KEY: &str = "userId";
pub const PROFILE_KEY: &str = "workTimeUser";

/// Language of the page labels and of the abbreviated month names on rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    It,
    En,
}

const IT_MONTHS: [&str; 12] = [
    "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto", "settembre",
    "ottobre", "novembre", "dicembre",
];
const IT_SHORT_MONTHS: [&str; 12] = [
    "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
];
const EN_MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];
const EN_SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Locale {
    /// Full month names, lowercase, January first.
    pub fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Locale::It => &IT_MONTHS,
            Locale::En => &EN_MONTHS,
        }
    }

    pub fn short_month_names(self) -> &'static [&'static str; 12] {
        match self {
            Locale::It => &IT_SHORT_MONTHS,
            Locale::En => &EN_SHORT_MONTHS,
        }
    }

    /// Month number (1-12) for a full month name, ignoring case.
    pub fn month_number(self, name: &str) -> Option<u32> {
        let name = name.to_lowercase();
        self.month_names()
            .iter()
            .position(|month| *month == name)
            .map(|index| index as u32 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the shift service, e.g. `https://worktime.example.com`.
    pub base_url: String,
    pub login_path: String,
    pub user_id_key: String,
    pub profile_key: String,
    pub locale: Locale,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: "http://localhost:5000".to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            user_id_key: USER_ID_KEY.to_string(),
            profile_key: PROFILE_KEY.to_string(),
            locale: Locale::default(),
        }
    }
}

impl ClientConfig {
    /// Config for a page served from the same origin as the service.
    pub fn for_origin(origin: impl Into<String>) -> Self {
        ClientConfig {
            base_url: origin.into(),
            ..Default::default()
        }
    }
}
