use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::LocaleError,
    locales::{LocaleEntry, LocaleTable},
    negotiate,
};

/// Locale settings of the application using the picker.
///
/// It parsed from a toml file like this:
///
/// ```toml
/// [locale]
/// default = "de_DE"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct LocaleConfig {
    #[serde(default)]
    locale: LocaleSection,
}

#[derive(Debug, Deserialize)]
struct LocaleSection {
    /// The fallback locale for unknown codes.
    /// Default to the first locale of the table, 'en_GB'.
    #[serde(default = "default_locale_code")]
    default: String,
}

impl Default for LocaleSection {
    fn default() -> Self {
        LocaleSection {
            default: default_locale_code(),
        }
    }
}

fn default_locale_code() -> String {
    LocaleTable::default_entry().code.to_owned()
}

impl LocaleConfig {
    pub fn from_toml(content: &str) -> Result<Self, LocaleError> {
        let config = toml::from_str::<LocaleConfig>(content)?;
        // An unknown fallback would leave `resolve` nothing to return.
        if !LocaleTable::contains(&config.locale.default) {
            return Err(LocaleError::NotFound(config.locale.default));
        }
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LocaleError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// The fallback locale entry.
    pub fn default_locale(&self) -> &'static LocaleEntry {
        LocaleTable::get(&self.locale.default).unwrap_or_else(LocaleTable::default_entry)
    }

    /// Resolve `code` to its locale, falling back to the default locale
    /// if the code isn't in the table.
    pub fn resolve(&self, code: &str) -> &'static LocaleEntry {
        LocaleTable::get(code).unwrap_or_else(|| {
            let fallback = self.default_locale();
            log::warn!(
                "Unknown locale `{code}`, fallback to `{}` ({})",
                fallback.code,
                fallback.english_name
            );
            fallback
        })
    }

    /// Negotiate the locale for `preferred` tags, falling back to the
    /// default locale if none of them matches.
    pub fn resolve_preferred<I, S>(&self, preferred: I) -> &'static LocaleEntry
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        negotiate::negotiate(preferred).unwrap_or_else(|| {
            log::info!("No preferred locale matched, use `{}`", self.locale.default);
            self.default_locale()
        })
    }
}
