//! Page windows for list views.
//!
//! `current_page == 0` is the out-of-range sentinel. Page numbers start at 1.

use serde::Serialize;

/// Entries per list page unless configured otherwise.
pub const PAGE_SIZE: usize = 8;

/// A requested page number as it arrives from a route or a flag.
///
/// Anything that is not a positive integer collapses to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest(Option<usize>);

impl PageRequest {
    pub const fn get(self) -> Option<usize> {
        self.0
    }
}

impl From<usize> for PageRequest {
    fn from(n: usize) -> Self {
        Self((n > 0).then_some(n))
    }
}

impl From<u32> for PageRequest {
    fn from(n: u32) -> Self {
        Self::from(n as usize)
    }
}

impl From<i64> for PageRequest {
    fn from(n: i64) -> Self {
        usize::try_from(n).map_or(Self(None), Self::from)
    }
}

impl From<i32> for PageRequest {
    fn from(n: i32) -> Self {
        Self::from(i64::from(n))
    }
}

impl From<&str> for PageRequest {
    fn from(s: &str) -> Self {
        s.trim().parse::<usize>().map_or(Self(None), Self::from)
    }
}

impl From<Option<&str>> for PageRequest {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Self(None), Self::from)
    }
}

impl From<Option<u32>> for PageRequest {
    fn from(n: Option<u32>) -> Self {
        n.map_or(Self(None), Self::from)
    }
}

impl From<Option<usize>> for PageRequest {
    fn from(n: Option<usize>) -> Self {
        n.map_or(Self(None), Self::from)
    }
}

/// One page of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow<'a, T> {
    pub total_pages: usize,
    pub current_page: usize,
    pub items: &'a [T],
}

impl<T> PageWindow<'_, T> {
    /// `false` for the out-of-range sentinel.
    pub const fn is_valid(&self) -> bool {
        self.current_page != 0
    }

    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub const fn has_next(&self) -> bool {
        self.current_page != 0 && self.current_page < self.total_pages
    }
}

/// `ceil(total / page_size)`, 0 when `page_size` is 0.
pub const fn total_pages(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Slice `entries` into the requested page.
///
/// In index mode the request is ignored and the first page is returned.
/// Otherwise an invalid or out-of-range request yields `current_page == 0`
/// with no items.
pub fn paginate<T>(
    entries: &[T],
    page_size: usize,
    page: impl Into<PageRequest>,
    is_index: bool,
) -> PageWindow<'_, T> {
    let total = total_pages(entries.len(), page_size);
    let sentinel = PageWindow {
        total_pages: total,
        current_page: 0,
        items: &entries[..0],
    };

    if page_size == 0 {
        return sentinel;
    }

    if is_index {
        return PageWindow {
            total_pages: total,
            current_page: 1,
            items: &entries[..page_size.min(entries.len())],
        };
    }

    match page.into().get() {
        Some(n) if n <= total => {
            let start = (n - 1) * page_size;
            let end = (start + page_size).min(entries.len());
            PageWindow {
                total_pages: total,
                current_page: n,
                items: &entries[start..end],
            }
        }
        _ => sentinel,
    }
}

/// `[1, 2, ..., total_pages]`.
pub fn page_numbers(total: usize, page_size: usize) -> Vec<usize> {
    (1..=total_pages(total, page_size)).collect()
}
