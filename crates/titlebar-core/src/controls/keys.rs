//! Modifier key tracking for the macOS zoom button.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// Keys that can gate the zoom-vs-fullscreen behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModifierKey {
    /// Option on macOS keyboards.
    #[default]
    Alt,
    Shift,
    Control,
    /// Command on macOS, the Windows key elsewhere.
    Meta,
}

/// Config values accepted for `modifier_key`.
pub const VALID_MODIFIER_KEYS: [&str; 4] = ["alt", "shift", "control", "meta"];

impl ModifierKey {
    pub const ALL: [ModifierKey; 4] = [
        ModifierKey::Alt,
        ModifierKey::Shift,
        ModifierKey::Control,
        ModifierKey::Meta,
    ];

    /// Names accepted for this key, both in config and in key events.
    /// The first entry is the canonical name.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ModifierKey::Alt => &["alt", "option"],
            ModifierKey::Shift => &["shift"],
            ModifierKey::Control => &["control", "ctrl"],
            ModifierKey::Meta => &["meta", "cmd", "command", "super", "platform"],
        }
    }

    /// Whether a key-event name refers to this key.
    pub fn matches(&self, key: &str) -> bool {
        let key = key.trim();
        self.aliases()
            .iter()
            .any(|alias| key.eq_ignore_ascii_case(alias))
    }

    fn is_held_in(&self, state: ModifierState) -> bool {
        match self {
            ModifierKey::Alt => state.alt,
            ModifierKey::Shift => state.shift,
            ModifierKey::Control => state.control,
            ModifierKey::Meta => state.meta,
        }
    }
}

impl FromStr for ModifierKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModifierKey::ALL
            .into_iter()
            .find(|key| key.matches(s))
            .ok_or_else(|| ConfigError::InvalidModifierKey { key: s.to_string() })
    }
}

impl fmt::Display for ModifierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.aliases()[0])
    }
}

/// Snapshot of held modifiers, as reported by a modifiers-changed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    pub alt: bool,
    pub shift: bool,
    pub control: bool,
    pub meta: bool,
}

/// Tracks whether the configured modifier key is held.
///
/// Only listens while started; events that arrive after [`stop`] are
/// ignored and the flag is cleared.
///
/// [`stop`]: KeyTracker::stop
#[derive(Debug, Clone)]
pub struct KeyTracker {
    key: ModifierKey,
    pressed: bool,
    listening: bool,
}

impl KeyTracker {
    pub fn new(key: ModifierKey) -> Self {
        Self {
            key,
            pressed: false,
            listening: false,
        }
    }

    pub fn key(&self) -> ModifierKey {
        self.key
    }

    pub fn start(&mut self) {
        self.listening = true;
    }

    pub fn stop(&mut self) {
        self.listening = false;
        self.pressed = false;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// For hosts that report modifiers as named key events. gpui uses
    /// `modifiers_changed` instead.
    ///
    /// Returns true if the flag changed.
    pub fn key_down(&mut self, key: &str) -> bool {
        self.apply(self.key.matches(key), true)
    }

    /// Returns true if the flag changed.
    pub fn key_up(&mut self, key: &str) -> bool {
        self.apply(self.key.matches(key), false)
    }

    /// Returns true if the flag changed.
    pub fn modifiers_changed(&mut self, state: ModifierState) -> bool {
        self.apply(true, self.key.is_held_in(state))
    }

    fn apply(&mut self, relevant: bool, pressed: bool) -> bool {
        if !self.listening || !relevant || self.pressed == pressed {
            return false;
        }
        self.pressed = pressed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modifier_key() {
        assert_eq!("alt".parse::<ModifierKey>().unwrap(), ModifierKey::Alt);
        assert_eq!("Option".parse::<ModifierKey>().unwrap(), ModifierKey::Alt);
        assert_eq!("ctrl".parse::<ModifierKey>().unwrap(), ModifierKey::Control);
        assert_eq!(" meta ".parse::<ModifierKey>().unwrap(), ModifierKey::Meta);
        assert!(matches!(
            "hyper".parse::<ModifierKey>(),
            Err(ConfigError::InvalidModifierKey { .. })
        ));
    }

    #[test]
    fn test_every_event_alias_parses_as_config() {
        for key in ModifierKey::ALL {
            for alias in key.aliases() {
                assert!(key.matches(alias));
                assert_eq!(alias.parse::<ModifierKey>().unwrap(), key, "{alias}");
            }
        }
        assert_eq!("platform".parse::<ModifierKey>().unwrap(), ModifierKey::Meta);
    }

    #[test]
    fn test_valid_keys_parse() {
        for key in VALID_MODIFIER_KEYS {
            let parsed: ModifierKey = key.parse().unwrap();
            assert_eq!(parsed.to_string(), key);
        }
    }

    #[test]
    fn test_key_down_up_tracks_configured_key() {
        let mut tracker = KeyTracker::new(ModifierKey::Alt);
        tracker.start();

        assert!(tracker.key_down("Alt"));
        assert!(tracker.is_pressed());
        assert!(!tracker.key_down("Alt"));

        assert!(!tracker.key_up("Shift"));
        assert!(tracker.is_pressed());

        assert!(tracker.key_up("Alt"));
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn test_events_ignored_when_not_listening() {
        let mut tracker = KeyTracker::new(ModifierKey::Alt);
        assert!(!tracker.key_down("Alt"));
        assert!(!tracker.is_pressed());

        tracker.start();
        tracker.key_down("Alt");
        tracker.stop();
        assert!(!tracker.is_pressed());
        assert!(!tracker.key_down("Alt"));
    }

    #[test]
    fn test_modifiers_changed() {
        let mut tracker = KeyTracker::new(ModifierKey::Shift);
        tracker.start();

        let held = ModifierState {
            shift: true,
            ..Default::default()
        };
        assert!(tracker.modifiers_changed(held));
        assert!(tracker.is_pressed());

        let alt_only = ModifierState {
            alt: true,
            ..Default::default()
        };
        assert!(tracker.modifiers_changed(alt_only));
        assert!(!tracker.is_pressed());
    }
}
