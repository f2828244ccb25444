//! Чистые хелперы отображения: плейсхолдеры, флаг страны, диапазон выборки.

pub(crate) const TEXT_PLACEHOLDER: &str = "—";
pub(crate) const GLOBE: &str = "🌐";

// Смещение 'A' -> региональный индикатор U+1F1E6.
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Двухбуквенный ISO-код страны как эмодзи-флаг. Пустой или кривой код
/// рисуется глобусом.
pub(crate) fn country_flag(code: &str) -> String {
    if code.is_empty() {
        return GLOBE.to_string();
    }
    let mut flag = String::new();
    for c in code.chars() {
        let upper = c.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return GLOBE.to_string();
        }
        match char::from_u32(upper as u32 + REGIONAL_INDICATOR_OFFSET) {
            Some(indicator) => flag.push(indicator),
            None => return GLOBE.to_string(),
        }
    }
    flag
}

pub(crate) fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    let parts: Vec<&str> = [first, last]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect();
    if parts.is_empty() {
        TEXT_PLACEHOLDER.to_string()
    } else {
        parts.join(" ")
    }
}

pub(crate) fn text_or_dash(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => TEXT_PLACEHOLDER.to_string(),
    }
}

pub(crate) fn number_or_dash(value: Option<i64>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| TEXT_PLACEHOLDER.to_string())
}

pub(crate) fn count_or_zero(value: Option<i64>) -> i64 {
    value.unwrap_or(0)
}

/// Границы "Showing {from}–{to} of {total}". Для пустой выборки обе нули.
pub(crate) fn showing_range(page: u32, page_size: u32, total: u64) -> (u64, u64) {
    if total == 0 {
        return (0, 0);
    }
    let from = (u64::from(page) - 1) * u64::from(page_size) + 1;
    let to = (u64::from(page) * u64::from(page_size)).min(total);
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_flag_maps_letters_to_regional_indicators() {
        assert_eq!(country_flag("UZ"), "🇺🇿");
        assert_eq!(country_flag("us"), "🇺🇸");
    }

    #[test]
    fn country_flag_falls_back_to_globe() {
        assert_eq!(country_flag(""), GLOBE);
        assert_eq!(country_flag("U1"), GLOBE);
    }

    #[test]
    fn full_name_joins_present_parts() {
        assert_eq!(full_name(Some("Ali"), Some("Valiyev")), "Ali Valiyev");
        assert_eq!(full_name(Some("Ali"), None), "Ali");
        assert_eq!(full_name(None, Some("Valiyev")), "Valiyev");
    }

    #[test]
    fn full_name_placeholder_when_both_missing() {
        assert_eq!(full_name(None, None), TEXT_PLACEHOLDER);
        assert_eq!(full_name(Some("  "), Some("")), TEXT_PLACEHOLDER);
    }

    #[test]
    fn placeholders_never_leak_absence() {
        assert_eq!(text_or_dash(None), TEXT_PLACEHOLDER);
        assert_eq!(text_or_dash(Some("")), TEXT_PLACEHOLDER);
        assert_eq!(text_or_dash(Some("kecha")), "kecha");
        assert_eq!(number_or_dash(None), TEXT_PLACEHOLDER);
        assert_eq!(number_or_dash(Some(1800)), "1800");
        assert_eq!(count_or_zero(None), 0);
        assert_eq!(count_or_zero(Some(7)), 7);
    }

    #[test]
    fn showing_range_for_full_page() {
        assert_eq!(showing_range(1, 10, 35), (1, 10));
    }

    #[test]
    fn showing_range_for_partial_last_page() {
        assert_eq!(showing_range(4, 10, 35), (31, 35));
    }

    #[test]
    fn showing_range_for_empty_result() {
        assert_eq!(showing_range(1, 10, 0), (0, 0));
    }
}
