use serde::Serialize;

pub(crate) const PAGE_SIZES: [u32; 3] = [10, 20, 50];
pub(crate) const DEFAULT_ORDERING: &str = "-skills_rating";

/// Зафиксированные параметры текущей выборки. Меняется только явными
/// действиями пользователя, ответ сервера его не трогает.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueryState {
    pub(crate) page: u32,
    pub(crate) page_size: u32,
    pub(crate) ordering: String,
    pub(crate) search: String,
    pub(crate) country: String,
    pub(crate) age_min: Option<u32>,
    pub(crate) age_max: Option<u32>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            ordering: DEFAULT_ORDERING.to_string(),
            search: String::new(),
            country: String::new(),
            age_min: None,
            age_max: None,
        }
    }
}

/// Черновик фильтров: сырые строки из инпутов. Попадает в `QueryState`
/// только по явному сабмиту формы.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DraftFilter {
    pub(crate) search: String,
    pub(crate) country: String,
    pub(crate) age_min: String,
    pub(crate) age_max: String,
}

fn parse_age(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[derive(Serialize)]
struct RequestParams<'a> {
    page: u32,
    page_size: u32,
    ordering: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    age_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    age_max: Option<u32>,
}

impl QueryState {
    /// Применяет черновик фильтров и возвращает на первую страницу.
    pub(crate) fn commit_filter(&self, draft: &DraftFilter) -> Self {
        Self {
            page: 1,
            search: draft.search.trim().to_string(),
            country: draft.country.clone(),
            age_min: parse_age(&draft.age_min),
            age_max: parse_age(&draft.age_max),
            ..self.clone()
        }
    }

    /// Клик по сортируемой колонке: повторный клик по текущему полю
    /// переворачивает направление.
    pub(crate) fn toggle_sort(&self, field: &str) -> Self {
        let ordering = if self.ordering == field {
            format!("-{field}")
        } else {
            field.to_string()
        };
        Self {
            page: 1,
            ordering,
            ..self.clone()
        }
    }

    /// Кнопки на границах задизейблены, clamp здесь — подстраховка от
    /// некорректных значений.
    pub(crate) fn with_page(&self, page: u32, pages_count: u32) -> Self {
        Self {
            page: page.clamp(1, pages_count.max(1)),
            ..self.clone()
        }
    }

    pub(crate) fn with_page_size(&self, page_size: u32) -> Self {
        if !PAGE_SIZES.contains(&page_size) {
            return self.clone();
        }
        Self {
            page: 1,
            page_size,
            ..self.clone()
        }
    }

    pub(crate) fn sort_marker(&self, field: &str) -> &'static str {
        if self.ordering == field {
            "▲"
        } else if self.ordering.strip_prefix('-') == Some(field) {
            "▼"
        } else {
            "▲▼"
        }
    }

    /// Каноническая строка запроса: пустые фильтры опускаются целиком,
    /// а не уходят пустыми значениями.
    pub(crate) fn to_query_string(&self) -> String {
        let params = RequestParams {
            page: self.page,
            page_size: self.page_size,
            ordering: &self.ordering,
            search: (!self.search.is_empty()).then_some(self.search.as_str()),
            country: (!self.country.is_empty()).then_some(self.country.as_str()),
            age_min: self.age_min,
            age_max: self.age_max,
        };
        serde_urlencoded::to_string(&params).unwrap_or_default()
    }
}
