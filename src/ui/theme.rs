//! Light/dark theme for the terminal front end.
//!
//! The preference is persisted next to the session. Views render plain text; the palette
//! only colours the chrome the binary prints around them (banners, toasts, alerts).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference; anything unknown falls back to light.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => Palette {
                accent: "\x1b[34m",
                muted: "\x1b[90m",
                success: "\x1b[32m",
                danger: "\x1b[31m",
            },
            Self::Dark => Palette {
                accent: "\x1b[96m",
                muted: "\x1b[37m",
                success: "\x1b[92m",
                danger: "\x1b[91m",
            },
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// ANSI colours for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: &'static str,
    pub muted: &'static str,
    pub success: &'static str,
    pub danger: &'static str,
}

impl Palette {
    const RESET: &'static str = "\x1b[0m";

    pub fn paint(&self, color: &str, text: &str) -> String {
        format!("{color}{text}{}", Self::RESET)
    }
}
