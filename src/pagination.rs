use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Сжатая полоса страниц: всегда первая и последняя, окно вокруг текущей,
/// многоточие на месте пропусков.
pub(crate) fn page_items(page: u32, pages_count: u32) -> Vec<PageItem> {
    if pages_count == 0 {
        return Vec::new();
    }

    let mut pages = BTreeSet::new();
    pages.insert(1);
    pages.insert(pages_count);
    for n in page.saturating_sub(1).max(1)..=(page + 1).min(pages_count) {
        pages.insert(n);
    }

    let mut items = Vec::new();
    let mut previous: Option<u32> = None;
    for n in pages {
        if let Some(prev) = previous {
            if n - prev > 1 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.push(PageItem::Page(n));
        previous = Some(n);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn middle_page_compresses_both_sides() {
        let items = page_items(5, 10);
        assert_eq!(
            items,
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn small_page_count_needs_no_ellipsis() {
        assert_eq!(page_items(1, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_items(2, 2), vec![Page(1), Page(2)]);
    }

    #[test]
    fn single_page_yields_single_item() {
        assert_eq!(page_items(1, 1), vec![Page(1)]);
    }

    #[test]
    fn no_pages_yields_nothing() {
        assert!(page_items(1, 0).is_empty());
    }

    #[test]
    fn first_page_compresses_only_tail() {
        assert_eq!(
            page_items(1, 10),
            vec![Page(1), Page(2), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn last_page_compresses_only_head() {
        assert_eq!(
            page_items(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    #[test]
    fn adjacent_window_merges_with_bounds() {
        // Окно 1..=3 смыкается с первой страницей, разрыва нет.
        assert_eq!(
            page_items(2, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }
}
