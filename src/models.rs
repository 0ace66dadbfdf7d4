//! Data models and structures
//!
//! Defines the presentation request collected from a front end, the fixed
//! option sets it draws from, and the process configuration.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Professional,
    Academic,
    #[serde(rename = "Sales/Marketing")]
    SalesMarketing,
    Simple,
    Technical,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Academic,
        Tone::SalesMarketing,
        Tone::Simple,
        Tone::Technical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Academic => "Academic",
            Tone::SalesMarketing => "Sales/Marketing",
            Tone::Simple => "Simple",
            Tone::Technical => "Technical",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Arabic];

    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
        }
    }
}

/// Display and parsing share the option label; parsing ignores case and also
/// takes `-` in place of `/`.
macro_rules! impl_option_label {
    ($ty:ident, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase().replace('-', "/");
                $ty::ALL
                    .into_iter()
                    .find(|option| option.label().to_lowercase() == wanted)
                    .ok_or_else(|| {
                        let labels: Vec<&str> = $ty::ALL.iter().map(|o| o.label()).collect();
                        format!(
                            "Unknown {} '{}'. Expected one of: {}",
                            $what,
                            s,
                            labels.join(", ")
                        )
                    })
            }
        }
    };
}

impl_option_label!(Tone, "tone");
impl_option_label!(Level, "level");
impl_option_label!(Language, "language");

/// Everything a front end collects for one slide deck.
///
/// Built fresh for each call and only borrowed afterwards. Absent fields
/// deserialize to the same defaults a blank form starts with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PresentationRequest {
    pub topic: String,
    pub audience: String,
    pub goal: String,
    pub tone: Tone,
    #[serde(deserialize_with = "whole_number")]
    pub duration_min: u32,
    #[serde(deserialize_with = "whole_number")]
    pub slide_count: u32,
    pub level: Level,
    pub language: Language,
    pub must_include: String,
    pub must_avoid: String,
    pub speaker_notes: bool,
    pub extra_notes: String,
    /// Draft material to refine rather than replace.
    pub user_content: String,
}

/// Accept integers or floats (slider widgets send `8.0`), truncating any
/// fraction toward zero.
fn whole_number<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(u32),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(n) => Ok(n),
        Number::Float(f) if f.is_finite() && f >= 0.0 && f.trunc() <= f64::from(u32::MAX) => {
            Ok(f.trunc() as u32)
        }
        Number::Float(f) => Err(D::Error::custom(format!(
            "expected a non-negative whole number, got {}",
            f
        ))),
    }
}

impl Default for PresentationRequest {
    fn default() -> Self {
        Self {
            topic: String::new(),
            audience: String::new(),
            goal: String::new(),
            tone: Tone::default(),
            duration_min: 10,
            slide_count: 8,
            level: Level::default(),
            language: Language::default(),
            must_include: String::new(),
            must_avoid: String::new(),
            speaker_notes: true,
            extra_notes: String::new(),
            user_content: String::new(),
        }
    }
}

// Configuration
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` leaves generation disabled for the life of the process.
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let request_timeout = match non_empty("OPENAI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    crate::Error::Config(format!(
                        "OPENAI_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            openai_api_key: non_empty("OPENAI_API_KEY"),
            openai_model: non_empty("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: non_empty("OPENAI_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout,
        })
    }
}
