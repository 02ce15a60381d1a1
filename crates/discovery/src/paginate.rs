//! Fixed-size pagination over an ordered list.

use serde::Serialize;

/// One page of an ordered list. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Page count for display: at least 1 even for an empty list.
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
            total_pages: self.total_pages,
        }
    }
}

/// `ceil(count / page_size)`; `0` for an empty list. A page size of 0 counts as 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Slice `items[(page-1)*size .. page*size]`. Page 0 or past the end is empty.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let slice = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size).min(items.len());
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        }
        None => &items[..0],
    };

    Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_count: items.len(),
        total_pages: total_pages(items.len(), page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_pages_in_order() {
        let items: Vec<u32> = (1..=10).collect();
        assert_eq!(paginate(&items, 1, 4).items, vec![1, 2, 3, 4]);
        assert_eq!(paginate(&items, 2, 4).items, vec![5, 6, 7, 8]);
        assert_eq!(paginate(&items, 3, 4).items, vec![9, 10]);
        assert_eq!(paginate(&items, 3, 4).total_pages, 3);
        assert_eq!(paginate(&items, 3, 4).total_count, 10);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items: Vec<u32> = (1..=10).collect();
        assert!(paginate(&items, 0, 4).items.is_empty());
        assert!(paginate(&items, 4, 4).items.is_empty());
        assert!(paginate(&items, usize::MAX, 4).items.is_empty());
    }

    #[test]
    fn empty_list_has_zero_pages_but_displays_one() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 12);
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.display_total_pages(), 1);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let items = vec!['a', 'b'];
        let page = paginate(&items, 2, 0);
        assert_eq!(page.items, vec!['b']);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(total_pages(12, 4), 3);
        assert_eq!(total_pages(13, 4), 4);
        assert_eq!(total_pages(0, 4), 0);
    }
}
