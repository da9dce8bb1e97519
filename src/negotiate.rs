use crate::locales::{LocaleEntry, LocaleTable};

/// Normalize a language tag into the table's `language_REGION` shape.
///
/// `en-gb` becomes `en_GB`, `zh-Hant-TW` becomes `zh_TW`, `de` stays `de`.
/// A Chinese script without a region picks the region of that script,
/// so `zh-Hant` becomes `zh_TW` and `zh-Hans` becomes `zh_CN`.
/// Return `None` for empty tags and the `*` wildcard.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if tag.is_empty() || tag == "*" {
        return None;
    }

    let mut subtags = tag.split(['-', '_']).filter(|s| !s.is_empty());
    let language = subtags.next()?.to_ascii_lowercase();
    let rest = subtags.collect::<Vec<_>>();
    // Variants are skipped, the region is the first two-letter
    // subtag after the language.
    if let Some(region) = rest.iter().find(|s| s.len() == 2) {
        return Some(format!("{language}_{}", region.to_ascii_uppercase()));
    }

    let script_region = rest.iter().find_map(|script| {
        match (language.as_str(), script.to_ascii_lowercase().as_str()) {
            ("zh", "hant") => Some("TW"),
            ("zh", "hans") => Some("CN"),
            _ => None,
        }
    });
    match script_region {
        Some(region) => Some(format!("{language}_{region}")),
        None => Some(language),
    }
}

// Languages the table lists under another code.
fn table_language(language: &str) -> &str {
    match language {
        // Bokmål and Nynorsk
        "nb" | "nn" => "no",
        _ => language,
    }
}

/// Pick the best locale for `preferred` tags, in the caller's order of preference.
///
/// For each tag, an exact code match wins over a language-only match.
/// A language-only match picks the first entry of that language in
/// picker order, so `zh` gets `zh_CN` and `es-MX` gets `es_ES`.
/// `nb` and `nn` match the Norwegian `no_NO` entry.
pub fn negotiate<I, S>(preferred: I) -> Option<&'static LocaleEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    preferred.into_iter().find_map(|tag| {
        let normalized = normalize_tag(tag.as_ref())?;
        LocaleTable::get(&normalized).or_else(|| {
            let language = table_language(
                normalized
                    .split_once('_')
                    .map_or(normalized.as_str(), |(lang, _)| lang),
            );
            LocaleTable::entries().find(|entry| entry.language() == language)
        })
    })
}

/// Split an `Accept-Language` header into tags, highest weight first.
///
/// Tags with `q=0` are dropped, the client refuses them.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    accept_language::parse_with_quality(header)
        .into_iter()
        .filter_map(|(tag, quality)| {
            if tag.is_empty() {
                None
            } else if quality > 0.0 {
                Some(tag)
            } else {
                log::debug!("Ignore refused language `{tag}`");
                None
            }
        })
        .collect()
}
