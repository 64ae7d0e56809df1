use crate::application::ports::MessageCatalog;
use crate::domain::Locale;

/// Parses an `Accept-Language` value into locales ordered by quality.
///
/// Wildcards, malformed tags and `q=0` entries are dropped.
pub fn parse_accept_language(value: &str) -> Vec<Locale> {
    let mut weighted: Vec<(Locale, f32)> = value
        .split(',')
        .filter_map(|part| {
            let mut components = part.split(';');
            let locale = Locale::parse(components.next()?)?;
            let quality = components
                .filter_map(|param| param.split_once('='))
                .filter(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
                .find_map(|(_, q)| q.trim().parse::<f32>().ok())
                .unwrap_or(1.0);
            (quality > 0.0).then_some((locale, quality))
        })
        .collect();

    weighted.sort_by(|a, b| b.1.total_cmp(&a.1));
    weighted.into_iter().map(|(locale, _)| locale).collect()
}

/// First requested locale the catalog has a bundle for, else `default_locale`.
pub fn negotiate_locale(
    accept_language: Option<&str>,
    catalog: &dyn MessageCatalog,
    default_locale: &Locale,
) -> Locale {
    accept_language
        .map(parse_accept_language)
        .unwrap_or_default()
        .into_iter()
        .find(|locale| catalog.supports_locale(locale))
        .unwrap_or_else(|| default_locale.clone())
}
