use serde::Deserialize;

/// Запись пользователя как её отдаёт API. Кроме id всё опционально:
/// отсутствие поля — это плейсхолдер на экране, а не ошибка.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserRecord {
    pub(crate) id: i64,
    #[serde(default)]
    pub(crate) username: Option<String>,
    #[serde(default)]
    pub(crate) first_name: Option<String>,
    #[serde(default)]
    pub(crate) last_name: Option<String>,
    #[serde(default)]
    pub(crate) avatar: Option<String>,
    #[serde(default)]
    pub(crate) country: Option<String>,
    #[serde(default)]
    pub(crate) age: Option<u32>,
    #[serde(default)]
    pub(crate) skills_rating: Option<i64>,
    #[serde(default)]
    pub(crate) activity_rating: Option<i64>,
    #[serde(default)]
    pub(crate) contests_count: Option<i64>,
    #[serde(default)]
    pub(crate) bellashuvlar_count: Option<i64>,
    #[serde(default)]
    pub(crate) streak: Option<i64>,
    #[serde(default)]
    pub(crate) kepcoin: Option<i64>,
    #[serde(default)]
    pub(crate) last_seen: Option<String>,
}

/// Одна страница выборки. Прошлая страница выбрасывается целиком,
/// никакого слияния или кеша.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsersResponse {
    #[serde(default)]
    pub(crate) data: Vec<UserRecord>,
    #[serde(default)]
    pub(crate) total: u64,
    #[serde(default)]
    pub(crate) pages_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_record_parses_camel_case_fields() {
        let raw = r#"{
            "id": 42,
            "username": "bek",
            "firstName": "Bek",
            "lastName": "Toshev",
            "avatar": "https://kep.uz/a/42.png",
            "country": "UZ",
            "age": 21,
            "skillsRating": 1800,
            "activityRating": 95,
            "contestsCount": 12,
            "bellashuvlarCount": 4,
            "streak": 9,
            "kepcoin": 350,
            "lastSeen": "2026-08-20"
        }"#;
        let user: UserRecord = serde_json::from_str(raw).expect("record should parse");
        assert_eq!(user.id, 42);
        assert_eq!(user.username.as_deref(), Some("bek"));
        assert_eq!(user.first_name.as_deref(), Some("Bek"));
        assert_eq!(user.skills_rating, Some(1800));
        assert_eq!(user.bellashuvlar_count, Some(4));
        assert_eq!(user.last_seen.as_deref(), Some("2026-08-20"));
    }

    #[test]
    fn sparse_record_defaults_missing_fields_to_none() {
        let user: UserRecord =
            serde_json::from_str(r#"{"id": 1}"#).expect("sparse record should parse");
        assert_eq!(user.id, 1);
        assert!(user.username.is_none());
        assert!(user.age.is_none());
        assert!(user.kepcoin.is_none());
    }

    #[test]
    fn null_fields_are_treated_as_absent() {
        let user: UserRecord = serde_json::from_str(r#"{"id": 2, "age": null, "username": null}"#)
            .expect("record with nulls should parse");
        assert!(user.age.is_none());
        assert!(user.username.is_none());
    }

    #[test]
    fn response_defaults_every_field() {
        let response: UsersResponse =
            serde_json::from_str("{}").expect("empty body should parse");
        assert!(response.data.is_empty());
        assert_eq!(response.total, 0);
        assert_eq!(response.pages_count, 0);
    }

    #[test]
    fn response_reads_pages_count_in_camel_case() {
        let raw = r#"{"data": [{"id": 1}], "total": 35, "pagesCount": 4}"#;
        let response: UsersResponse = serde_json::from_str(raw).expect("body should parse");
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.total, 35);
        assert_eq!(response.pages_count, 4);
    }
}
