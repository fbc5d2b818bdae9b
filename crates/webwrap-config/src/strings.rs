//! Localized navigation-bar labels.
//!
//! The shell only ever needs three strings, looked up by [`NavAction`] key.
//! Built-in tables cover a handful of locales; `[labels]` in the config
//! picks one and may override individual keys.

use webwrap_common::NavAction;

use crate::schema::LabelsConfig;

/// Fallback locale when the configured one has no table.
pub const DEFAULT_LOCALE: &str = "en";

/// Built-in label tables, `(locale, [back, home, forward])`.
const BUILT_IN: &[(&str, [&str; 3])] = &[
    ("en", ["Back", "Home", "Forward"]),
    ("de", ["Zurück", "Start", "Vor"]),
    ("fr", ["Retour", "Accueil", "Suivant"]),
    ("es", ["Atrás", "Inicio", "Adelante"]),
    ("ru", ["Назад", "Домой", "Вперёд"]),
];

/// Resolved labels for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    locale: String,
    back: String,
    home: String,
    forward: String,
}

impl Strings {
    /// Labels for `locale`, matching on the primary subtag (`de-CH` → `de`).
    pub fn for_locale(locale: &str) -> Self {
        let primary = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        let (resolved, table) = BUILT_IN
            .iter()
            .find(|(tag, _)| *tag == primary)
            .copied()
            .unwrap_or_else(|| {
                tracing::debug!(locale, "no label table for locale, using {DEFAULT_LOCALE}");
                BUILT_IN[0]
            });

        Self {
            locale: resolved.to_string(),
            back: table[0].to_string(),
            home: table[1].to_string(),
            forward: table[2].to_string(),
        }
    }

    /// Labels for the configured locale with per-key overrides applied.
    pub fn from_config(config: &LabelsConfig) -> Self {
        let mut strings = Self::for_locale(&config.locale);
        let overrides = [
            (NavAction::Back, &config.back),
            (NavAction::Home, &config.home),
            (NavAction::Forward, &config.forward),
        ];
        for (action, value) in overrides {
            if let Some(label) = value.as_deref().filter(|l| !l.trim().is_empty()) {
                *strings.slot_mut(action) = label.to_string();
            }
        }
        strings
    }

    /// The label for a button.
    pub fn label(&self, action: NavAction) -> &str {
        match action {
            NavAction::Back => &self.back,
            NavAction::Home => &self.home,
            NavAction::Forward => &self.forward,
        }
    }

    /// The locale whose table was used.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether a built-in table exists for the primary subtag of `locale`.
    pub fn is_supported(locale: &str) -> bool {
        let primary = locale.split(['-', '_']).next().unwrap_or_default();
        BUILT_IN
            .iter()
            .any(|(tag, _)| tag.eq_ignore_ascii_case(primary))
    }

    fn slot_mut(&mut self, action: NavAction) -> &mut String {
        match action {
            NavAction::Back => &mut self.back,
            NavAction::Home => &mut self.home,
            NavAction::Forward => &mut self.forward,
        }
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::for_locale(DEFAULT_LOCALE)
    }
}
