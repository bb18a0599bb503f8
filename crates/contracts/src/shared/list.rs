use serde::Deserialize;

/// Page sizes offered by every list screen.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 15, 30];

/// One page of records plus the overall count, as returned by the
/// `/page` endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Paged<T> {
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

/// Pagination parameters shared by every list query.
pub trait PageQuery {
    fn page(&self) -> u32;
    fn set_page(&mut self, page: u32);
    fn page_size(&self) -> u32;
    fn set_page_size(&mut self, size: u32);
}

/// Apply a filter mutation and reset to the first page.
///
/// Changing only the page number goes through `set_page` directly and
/// keeps the filters; any filter/search change must come through here.
pub fn apply_filter_change<Q: PageQuery>(query: &mut Q, apply: impl FnOnce(&mut Q)) {
    apply(query);
    query.set_page(1);
}

pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    ((total + page_size as u64 - 1) / page_size as u64) as u32
}

/// A slot in the rendered page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Displayed page numbers: first, last and [current-1, current+1],
/// with gaps collapsed into a single ellipsis marker.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PageItem> {
    let mut items = Vec::new();
    let mut prev: Option<u32> = None;
    for p in 1..=total_pages {
        let keep = p == 1 || p == total_pages || (p + 1 >= current && p <= current + 1);
        if !keep {
            continue;
        }
        if let Some(last) = prev {
            if p - last > 1 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.push(PageItem::Page(p));
        prev = Some(p);
    }
    items
}

/// Monotonic ticket issuer used to discard stale list responses.
///
/// Every fetch takes a ticket; only the response holding the most
/// recently issued ticket may be applied, so a slow earlier request
/// can never overwrite fresher results.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchSequence {
    issued: u64,
}

impl FetchSequence {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.issued == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::CategoryPageQuery;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(12, 10), 2);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_window_without_gaps() {
        // total=12, pageSize=10 -> two pages, no ellipsis
        assert_eq!(
            page_window(1, 2),
            vec![PageItem::Page(1), PageItem::Page(2)]
        );
    }

    #[test]
    fn test_window_with_gaps_on_both_sides() {
        assert_eq!(
            page_window(5, 10),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Ellipsis,
                PageItem::Page(10),
            ]
        );
    }

    #[test]
    fn test_window_near_edges() {
        assert_eq!(
            page_window(1, 5),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Ellipsis,
                PageItem::Page(5),
            ]
        );
        assert_eq!(
            page_window(5, 5),
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(4),
                PageItem::Page(5),
            ]
        );
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut q = CategoryPageQuery::default();
        q.set_page(3);
        apply_filter_change(&mut q, |q| q.name = Some("鱼".to_string()));
        assert_eq!(q.page(), 1);
        assert_eq!(q.name.as_deref(), Some("鱼"));
    }

    #[test]
    fn test_page_change_keeps_filters() {
        let mut q = CategoryPageQuery::default();
        apply_filter_change(&mut q, |q| {
            q.name = Some("鱼".to_string());
            q.category_type = Some(1);
        });
        q.set_page(2);
        assert_eq!(q.page(), 2);
        assert_eq!(q.name.as_deref(), Some("鱼"));
        assert_eq!(q.category_type, Some(1));
    }

    #[test]
    fn test_fetch_sequence_discards_stale() {
        let mut seq = FetchSequence::default();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
