//! Page-link window math for paginated lists.
//!
//! # Design
//! - Short lists (up to [`FULL_RANGE_LIMIT`] pages) show every page.
//! - Longer lists show the first and last page, one neighbour either side of
//!   the current page, and at most one ellipsis per side.

use aeas_models::PageMeta;

/// Largest page count rendered without ellipses.
pub const FULL_RANGE_LIMIT: u32 = 7;

/// One slot of the pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSlot {
    /// Link to a page.
    Page(u32),
    /// Collapsed gap.
    Ellipsis,
}

/// Computed pagination bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page, clamped to `1..=total_pages`.
    pub current: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Slots in display order.
    pub slots: Vec<PageSlot>,
}

impl PageWindow {
    /// Page before the current one, if any.
    #[must_use]
    pub const fn previous(&self) -> Option<u32> {
        if self.current > 1 {
            Some(self.current - 1)
        } else {
            None
        }
    }

    /// Page after the current one, if any.
    #[must_use]
    pub const fn next(&self) -> Option<u32> {
        if self.current < self.total_pages {
            Some(self.current + 1)
        } else {
            None
        }
    }
}

/// Build the pagination bar, or `None` when there is nothing to paginate.
#[must_use]
pub fn page_window(current: u32, total_pages: u32) -> Option<PageWindow> {
    if total_pages <= 1 {
        return None;
    }
    let current = current.clamp(1, total_pages);
    let slots = if total_pages <= FULL_RANGE_LIMIT {
        (1..=total_pages).map(PageSlot::Page).collect()
    } else {
        let start = current.saturating_sub(1).max(2);
        let end = current.saturating_add(1).min(total_pages - 1);
        let mut slots = vec![PageSlot::Page(1)];
        if start > 2 {
            slots.push(PageSlot::Ellipsis);
        }
        slots.extend((start..=end).map(PageSlot::Page));
        if end < total_pages - 1 {
            slots.push(PageSlot::Ellipsis);
        }
        slots.push(PageSlot::Page(total_pages));
        slots
    };
    Some(PageWindow {
        current,
        total_pages,
        slots,
    })
}

/// Pagination bar for backend metadata.
#[must_use]
pub fn window_for(meta: Option<&PageMeta>) -> Option<PageWindow> {
    meta.and_then(|meta| page_window(meta.page, meta.total_pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(window: &PageWindow) -> Vec<u32> {
        window
            .slots
            .iter()
            .filter_map(|slot| match slot {
                PageSlot::Page(page) => Some(*page),
                PageSlot::Ellipsis => None,
            })
            .collect()
    }

    fn ellipses(window: &PageWindow) -> usize {
        window
            .slots
            .iter()
            .filter(|slot| **slot == PageSlot::Ellipsis)
            .count()
    }

    #[test]
    fn single_page_renders_nothing() {
        assert_eq!(page_window(1, 1), None);
        assert_eq!(page_window(1, 0), None);
        assert_eq!(window_for(None), None);
    }

    #[test]
    fn short_lists_show_every_page() -> Result<(), &'static str> {
        let window = page_window(3, 5).ok_or("window")?;
        assert_eq!(pages(&window), vec![1, 2, 3, 4, 5]);
        assert_eq!(ellipses(&window), 0);
        Ok(())
    }

    #[test]
    fn long_lists_collapse_both_sides() -> Result<(), &'static str> {
        let window = page_window(10, 20).ok_or("window")?;
        assert_eq!(pages(&window), vec![1, 9, 10, 11, 20]);
        assert_eq!(
            window.slots,
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis,
                PageSlot::Page(9),
                PageSlot::Page(10),
                PageSlot::Page(11),
                PageSlot::Ellipsis,
                PageSlot::Page(20),
            ]
        );
        Ok(())
    }

    #[test]
    fn edges_collapse_one_side_only() -> Result<(), &'static str> {
        let first = page_window(1, 20).ok_or("window")?;
        assert_eq!(pages(&first), vec![1, 2, 20]);
        assert_eq!(ellipses(&first), 1);
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some(2));

        let last = page_window(20, 20).ok_or("window")?;
        assert_eq!(pages(&last), vec![1, 19, 20]);
        assert_eq!(last.next(), None);

        let near_start = page_window(3, 8).ok_or("window")?;
        assert_eq!(pages(&near_start), vec![1, 2, 3, 4, 8]);
        assert_eq!(ellipses(&near_start), 1);
        Ok(())
    }

    #[test]
    fn out_of_range_pages_are_clamped() -> Result<(), &'static str> {
        let window = page_window(99, 12).ok_or("window")?;
        assert_eq!(window.current, 12);
        let zero = page_window(0, 12).ok_or("window")?;
        assert_eq!(zero.current, 1);
        Ok(())
    }

    #[test]
    fn last_page_at_the_numeric_limit_does_not_overflow() -> Result<(), &'static str> {
        let window = page_window(u32::MAX, u32::MAX).ok_or("window")?;
        assert_eq!(pages(&window), vec![1, u32::MAX - 1, u32::MAX]);
        assert_eq!(window.next(), None);
        Ok(())
    }
}
