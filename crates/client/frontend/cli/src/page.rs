//! Fixed-size pages over a list.

/// One page of `items`. Page numbers are 0-based and clamped into range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub number: usize,
    pub count: usize,
    /// Position of `items[0]` in the full list.
    pub offset: usize,
}

impl<'a, T> Page<'a, T> {
    pub fn of(all: &'a [T], number: usize, per_page: usize) -> Self {
        let per_page = per_page.max(1);
        let count = all.len().div_ceil(per_page).max(1);
        let number = number.min(count - 1);
        let offset = number * per_page;
        let end = (offset + per_page).min(all.len());
        Self {
            items: &all[offset..end],
            number,
            count,
            offset,
        }
    }

    pub fn has_next(&self) -> bool {
        self.number + 1 < self.count
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_pages_of_ten() {
        let all: Vec<u32> = (0..23).collect();
        let first = Page::of(&all, 0, 10);
        assert_eq!((first.items.len(), first.count, first.offset), (10, 3, 0));
        assert!(first.has_next() && !first.has_previous());

        let last = Page::of(&all, 2, 10);
        assert_eq!(last.items, &[20, 21, 22]);
        assert!(!last.has_next() && last.has_previous());
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let all = [1, 2, 3];
        let page = Page::of(&all, 5, 2);
        assert_eq!(page.number, 1);
        assert_eq!(page.items, &[3]);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let all: [u8; 0] = [];
        let page = Page::of(&all, 0, 10);
        assert_eq!(page.count, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next());
    }
}
