// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Pagination arithmetic.
//!
//! Page numbers are 1-based. The page buttons shown in the pagination bar are
//! a contiguous block aligned to multiples of [`PAGE_WINDOW`].

use std::ops::RangeInclusive;

pub(crate) const PAGE_SIZE: usize = 10;
pub(crate) const PAGE_WINDOW: usize = 5;

pub(crate) fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

/// Returns the page numbers to render as buttons for the current page.
///
/// The window starts at the multiple of [`PAGE_WINDOW`] below the current
/// page and never runs past `total_pages`, so page 7 of 12 shows pages 6 to
/// 10 and page 12 of 12 shows 11 and 12.
pub(crate) fn page_window(current_page: usize, total_pages: usize) -> RangeInclusive<usize> {
    let start = (current_page.max(1) - 1) / PAGE_WINDOW * PAGE_WINDOW;
    let len = PAGE_WINDOW.min(total_pages.saturating_sub(start));

    if len == 0 {
        return 1..=0;
    }

    (start + 1)..=(start + len)
}

pub(crate) fn has_previous(current_page: usize) -> bool {
    current_page > 1
}

pub(crate) fn has_next(current_page: usize, total_pages: usize) -> bool {
    current_page < total_pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(current: usize, total: usize) -> Vec<usize> {
        page_window(current, total).collect()
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, PAGE_SIZE), 0);
        assert_eq!(total_pages(1, PAGE_SIZE), 1);
        assert_eq!(total_pages(10, PAGE_SIZE), 1);
        assert_eq!(total_pages(11, PAGE_SIZE), 2);
        assert_eq!(total_pages(20, PAGE_SIZE), 2);
    }

    #[test]
    fn window_in_the_middle() {
        assert_eq!(window(7, 12), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_at_the_edges() {
        assert_eq!(window(1, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(5, 12), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(11, 12), vec![11, 12]);
        assert_eq!(window(1, 2), vec![1, 2]);
        assert_eq!(window(1, 0), Vec::<usize>::new());
    }

    #[test]
    fn window_past_the_last_page_is_empty() {
        assert_eq!(window(6, 3), Vec::<usize>::new());
    }

    #[test]
    fn window_is_bounded_and_aligned() {
        for total in 0..40 {
            for current in 1..=total.max(1) {
                let pages = window(current, total);
                assert!(pages.len() <= PAGE_WINDOW);
                if let Some(first) = pages.first() {
                    assert_eq!((first - 1) % PAGE_WINDOW, 0);
                    assert!(pages.contains(&current));
                    assert!(*pages.last().unwrap() <= total);
                }
            }
        }
    }

    #[test]
    fn previous_and_next_disable_at_bounds() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
        assert!(has_next(1, 2));
        assert!(!has_next(2, 2));
        assert!(!has_next(1, 0));
    }
}
