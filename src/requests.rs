/// Монотонный счётчик запросов для политики last-request-wins: ответ
/// применяется, только если его номер всё ещё последний выданный.
/// Запросы в полёте не отменяются, устаревшие ответы просто игнорируются.
#[derive(Debug, Clone, Default)]
pub(crate) struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub(crate) fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub(crate) fn is_current(&self, id: u64) -> bool {
        self.latest == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonically_increasing() {
        let mut seq = RequestSeq::default();
        let first = seq.begin();
        let second = seq.begin();
        assert!(second > first);
    }

    #[test]
    fn latest_request_stays_current() {
        let mut seq = RequestSeq::default();
        let id = seq.begin();
        assert!(seq.is_current(id));
    }

    #[test]
    fn earlier_request_goes_stale_once_a_newer_one_starts() {
        // Страница 1 запрошена, пользователь сразу ушёл на страницу 2:
        // ответ первого запроса должен быть отброшен при любом порядке прихода.
        let mut seq = RequestSeq::default();
        let page_one = seq.begin();
        let page_two = seq.begin();
        assert!(!seq.is_current(page_one));
        assert!(seq.is_current(page_two));
    }
}
