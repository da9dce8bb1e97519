//! The curated locale table behind a UI language picker.
//!
//! ```
//! use locale_picker::LocaleTable;
//!
//! assert_eq!(LocaleTable::lookup("fr_FR").unwrap(), "Français");
//! assert_eq!(LocaleTable::entries().next().unwrap().code, "en_GB");
//! ```
mod config;
mod error;
mod locales;
mod negotiate;

pub use config::LocaleConfig;
pub use error::LocaleError;
pub use locales::{get_locale_name, LocaleEntry, LocaleTable};
pub use negotiate::{negotiate, normalize_tag, parse_accept_language};
