//! Console language selection
//!
//! Label and group keys are handed to the localization layer untouched; this
//! module only decides which of the supported languages that layer should use.

/// Languages the console ships translations for
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "de", "en", "es", "fr", "it", "ja", "pl", "zh", "bg", "pt", "mk", "cs", "ru", "nl", "uk",
];

pub const FALLBACK_LANGUAGE: &str = "en";

fn supported(tag: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|l| l.eq_ignore_ascii_case(tag))
        .copied()
}

/// Map a language tag (`de`, `de-CH`, `pt_BR`) to a supported language,
/// falling back to English.
pub fn resolve_language(tag: &str) -> &'static str {
    match_language(tag).unwrap_or(FALLBACK_LANGUAGE)
}

fn match_language(tag: &str) -> Option<&'static str> {
    let tag = tag.trim();
    supported(tag).or_else(|| {
        let primary = tag.split(['-', '_']).next()?;
        supported(primary)
    })
}

/// Pick a language from an `Accept-Language` header value.
///
/// Entries are tried by descending `q` weight, ties in header order; `q=0`
/// entries and `*` are skipped.
pub fn negotiate_language(header: &str) -> &'static str {
    let mut ranked: Vec<(&str, f32)> = header
        .split(',')
        .filter_map(|part| {
            let mut it = part.split(';');
            let tag = it.next()?.trim();
            let q = it
                .find_map(|p| p.trim().strip_prefix("q="))
                .map(|q| q.trim().parse::<f32>().unwrap_or(0.0))
                .unwrap_or(1.0);
            (!tag.is_empty() && tag != "*" && q > 0.0).then_some((tag, q))
        })
        .collect();
    // stable: equal weights keep header order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .find_map(|(tag, _)| match_language(tag))
        .unwrap_or(FALLBACK_LANGUAGE)
}
