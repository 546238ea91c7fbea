use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use utoipa::ToSchema;

pub const DEFAULT_ADMIN_CHORD: &str = "Ctrl+Shift+A";

/// A key press as reported by the page's keydown listener.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyPress {
    #[schema(example = "A")]
    pub key: String,
    pub ctrl_key: bool,
    pub shift_key: bool,
    pub alt_key: bool,
    pub meta_key: bool,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChordParseError {
    #[error("Empty key chord")]
    Empty,
    #[error("Unknown modifier: {0}")]
    UnknownModifier(String),
    #[error("Key chord has no key: {0}")]
    MissingKey(String),
}

/// Modifier set plus one key, written like `Ctrl+Shift+A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
    pub key: String,
}

impl KeyChord {
    /// Modifiers must match exactly. Keys compare case-insensitively since
    /// Shift changes the reported character.
    pub fn matches(&self, press: &KeyPress) -> bool {
        self.ctrl == press.ctrl_key
            && self.shift == press.shift_key
            && self.alt == press.alt_key
            && self.meta == press.meta_key
            && self.key.eq_ignore_ascii_case(&press.key)
    }
}

impl Default for KeyChord {
    fn default() -> Self {
        Self {
            ctrl: true,
            shift: true,
            alt: false,
            meta: false,
            key: "A".to_string(),
        }
    }
}

impl FromStr for KeyChord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ChordParseError::Empty);
        }

        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = match parts.pop() {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => return Err(ChordParseError::MissingKey(s.to_string())),
        };

        let mut chord = KeyChord {
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
            key,
        };
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => chord.ctrl = true,
                "shift" => chord.shift = true,
                "alt" | "option" => chord.alt = true,
                "meta" | "cmd" | "super" => chord.meta = true,
                _ => return Err(ChordParseError::UnknownModifier(modifier.to_string())),
            }
        }
        Ok(chord)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.meta {
            write!(f, "Meta+")?;
        }
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: &str, ctrl: bool, shift: bool) -> KeyPress {
        KeyPress {
            key: key.to_string(),
            ctrl_key: ctrl,
            shift_key: shift,
            ..Default::default()
        }
    }

    #[test]
    fn default_chord_round_trips_through_text() {
        let chord: KeyChord = DEFAULT_ADMIN_CHORD.parse().unwrap();

        assert_eq!(chord, KeyChord::default());
        assert_eq!(chord.to_string(), DEFAULT_ADMIN_CHORD);
    }

    #[test]
    fn matches_requires_exact_modifiers() {
        let chord = KeyChord::default();

        assert!(chord.matches(&press("A", true, true)));
        assert!(!chord.matches(&press("A", true, false)));
        assert!(!chord.matches(&press("B", true, true)));

        let mut with_alt = press("A", true, true);
        with_alt.alt_key = true;
        assert!(!chord.matches(&with_alt));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<KeyChord>(), Err(ChordParseError::Empty));
        assert!(matches!(
            "Hyper+A".parse::<KeyChord>(),
            Err(ChordParseError::UnknownModifier(_))
        ));
        assert!(matches!(
            "Ctrl+".parse::<KeyChord>(),
            Err(ChordParseError::MissingKey(_))
        ));
    }
}
