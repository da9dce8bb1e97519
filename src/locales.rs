use std::{collections::HashMap, fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::LocaleError;

/// A locale the picker offers, such as `fr_FR` shown as `Français`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleEntry {
    /// The `language_REGION` code stored in settings.
    pub code: &'static str,
    /// The name rendered in the picker, written in the locale's own script.
    pub display_name: &'static str,
    #[serde(skip)]
    pub english_name: &'static str,
}

impl LocaleEntry {
    const fn new(
        code: &'static str,
        display_name: &'static str,
        english_name: &'static str,
    ) -> Self {
        LocaleEntry {
            code,
            display_name,
            english_name,
        }
    }

    pub fn language(&self) -> &'static str {
        self.code.split_once('_').map_or(self.code, |(lang, _)| lang)
    }

    pub fn region(&self) -> Option<&'static str> {
        self.code.split_once('_').map(|(_, region)| region)
    }
}

impl fmt::Display for LocaleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.code, self.display_name)
    }
}

impl FromStr for LocaleEntry {
    type Err = LocaleError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        LocaleTable::get(code)
            .copied()
            .ok_or_else(|| LocaleError::NotFound(code.to_owned()))
    }
}

// Keep English first, the rest is the order the picker shows.
static LOCALES: [LocaleEntry; 26] = [
    LocaleEntry::new("en_GB", "English", "English"),
    LocaleEntry::new("de_DE", "Deutsch", "German"),
    LocaleEntry::new("ru_RU", "Русский", "Russian"),
    LocaleEntry::new("nl_NL", "Nederlands", "Dutch"),
    LocaleEntry::new("it_IT", "Italiano", "Italian"),
    LocaleEntry::new("el_GR", "ελληνικά", "Greek"),
    LocaleEntry::new("tr_TR", "Türkçe", "Turkish"),
    LocaleEntry::new("fr_FR", "Français", "French"),
    LocaleEntry::new("pl_PL", "Polski", "Polish"),
    LocaleEntry::new("cs_CZ", "Čeština", "Czech"),
    LocaleEntry::new("es_ES", "Español", "Spanish"),
    LocaleEntry::new("gl_ES", "Galego", "Galician"),
    LocaleEntry::new("ca_ES", "Catalán", "Catalan"),
    LocaleEntry::new("hu_HU", "Magyar", "Hungarian"),
    LocaleEntry::new("da_DA", "Dansk", "Danish"),
    LocaleEntry::new("uk_UK", "Українська", "Ukrainian"),
    LocaleEntry::new("no_NO", "Norsk", "Norwegian"),
    LocaleEntry::new("sv_SV", "Svenska", "Swedish"),
    LocaleEntry::new("pt_PT", "Português", "Portuguese"),
    // Stored without the leading zero-width space of the upstream name.
    LocaleEntry::new("bg_BG", "Български", "Bulgarian"),
    LocaleEntry::new("sl_SI", "Slovenski", "Slovenian"),
    LocaleEntry::new("zh_CN", "简体中文", "Chinese (Simplified)"),
    LocaleEntry::new("zh_TW", "繁體中文", "Chinese (Taiwan)"),
    LocaleEntry::new("ja_JP", "日本語", "Japanese"),
    LocaleEntry::new("ko_KR", "한국어", "Korean"),
    LocaleEntry::new("ar_SA", "العربية", "Arabic"),
];

static LOCALE_INDEX: Lazy<HashMap<&'static str, &'static LocaleEntry>> =
    Lazy::new(|| LOCALES.iter().map(|entry| (entry.code, entry)).collect());

/// The fixed set of locales a user can pick from.
///
/// The table is compiled into the binary and never changes at runtime,
/// so every method is an associated function over the same static data.
pub struct LocaleTable;

impl LocaleTable {
    /// Get the display name of `code`, or [`LocaleError::NotFound`].
    ///
    /// Matching is exact: `en-GB` or `en_gb` are not `en_GB`. Use
    /// [`crate::negotiate()`] to match loosely formatted language tags.
    pub fn lookup(code: &str) -> Result<&'static str, LocaleError> {
        match Self::get(code) {
            Some(entry) => Ok(entry.display_name),
            None => {
                log::debug!("Locale `{code}` is not in the locale table");
                Err(LocaleError::NotFound(code.to_owned()))
            }
        }
    }

    pub fn get(code: &str) -> Option<&'static LocaleEntry> {
        LOCALE_INDEX.get(code).copied()
    }

    pub fn contains(code: &str) -> bool {
        LOCALE_INDEX.contains_key(code)
    }

    /// All locales in the order the picker shows them.
    ///
    /// Each call starts over from the first entry.
    pub fn entries() -> std::slice::Iter<'static, LocaleEntry> {
        LOCALES.iter()
    }

    /// The first entry of the table, `en_GB`.
    pub fn default_entry() -> &'static LocaleEntry {
        &LOCALES[0]
    }

    pub fn len() -> usize {
        LOCALES.len()
    }

    pub fn is_empty() -> bool {
        LOCALES.is_empty()
    }
}

pub fn get_locale_name(locale: &str) -> Option<&'static str> {
    LocaleTable::get(locale).map(|entry| entry.display_name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use test_case::test_case;

    #[test]
    fn test_codes_are_unique() {
        let codes = LocaleTable::entries()
            .map(|entry| entry.code)
            .collect::<HashSet<_>>();
        assert_eq!(codes.len(), LocaleTable::len());
        assert_eq!(LOCALE_INDEX.len(), LocaleTable::len());
    }

    #[test]
    fn test_display_names_not_empty() {
        assert!(LocaleTable::entries().all(|entry| !entry.display_name.trim().is_empty()));
    }

    #[test]
    fn test_display_names_without_zero_width_space() {
        assert!(LocaleTable::entries().all(|entry| !entry.display_name.contains('\u{200b}')));
        assert_eq!(LocaleTable::lookup("bg_BG").unwrap().chars().count(), 9);
    }

    #[test]
    fn test_codes_are_language_region() {
        for entry in LocaleTable::entries() {
            assert_eq!(entry.language().len(), 2, "{}", entry.code);
            assert_eq!(entry.region().map(str::len), Some(2), "{}", entry.code);
        }
    }

    #[test_case("en_GB", "English")]
    #[test_case("fr_FR", "Français")]
    #[test_case("ja_JP", "日本語")]
    #[test_case("bg_BG", "Български")]
    #[test_case("zh_TW", "繁體中文")]
    #[test_case("ar_SA", "العربية")]
    fn test_lookup(code: &str, name: &str) {
        assert_eq!(LocaleTable::lookup(code).unwrap(), name);
        assert_eq!(get_locale_name(code), Some(name));
    }

    #[test_case("xx_XX"; "unregistered")]
    #[test_case("en-GB"; "dash separator")]
    #[test_case("fr_fr"; "lowercase region")]
    #[test_case(""; "empty")]
    fn test_lookup_not_found(code: &str) {
        match LocaleTable::lookup(code) {
            Err(LocaleError::NotFound(missing)) => assert_eq!(missing, code),
            other => panic!("Unexpected lookup result: {other:?}"),
        }
        assert!(!LocaleTable::contains(code));
        assert_eq!(get_locale_name(code), None);
    }

    #[test]
    fn test_entries_order_is_stable() {
        let first = LocaleTable::entries()
            .map(|entry| (entry.code, entry.display_name))
            .collect::<Vec<_>>();
        let second = LocaleTable::entries()
            .map(|entry| (entry.code, entry.display_name))
            .collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(first[0], ("en_GB", "English"));
        assert_eq!(first.last(), Some(&("ar_SA", "العربية")));
        assert_eq!(LocaleTable::default_entry().code, "en_GB");
    }

    #[test]
    fn test_entry_count() {
        assert_eq!(LocaleTable::len(), 26);
        assert!(!LocaleTable::is_empty());
        assert_eq!(LocaleTable::entries().count(), 26);
    }

    #[test]
    fn test_from_str() {
        let entry = "de_DE".parse::<LocaleEntry>().unwrap();
        assert_eq!(entry.display_name, "Deutsch");
        assert_eq!(entry.english_name, "German");
        assert!("de".parse::<LocaleEntry>().is_err());
    }

    #[test]
    fn test_serialize_entry() {
        let entry = LocaleTable::get("pt_PT").unwrap();
        assert_eq!(
            serde_json::to_string(entry).unwrap(),
            r#"{"code":"pt_PT","displayName":"Português"}"#
        );
    }
}
