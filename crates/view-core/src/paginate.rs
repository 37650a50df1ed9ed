//! Fixed-size pages over a filtered collection.
//!
//! Pages are 1-based. Out-of-range page numbers clamp to the nearest valid
//! page; an empty collection still has one (empty) page.

use strum::{Display, EnumIter};

pub const PAGE_SIZE: usize = 20;

#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub visible: &'a [T],
    /// Clamped current page
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn is_last(&self) -> bool {
        self.page == self.total_pages
    }
}

/// `max(1, ceil(len / page_size))`. A page size of 0 counts as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = clamp_page(page, total_pages);
    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    let visible = items.get(start..end).unwrap_or_default();
    Page { visible, page, total_pages }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Navigation {
    First,
    Prev,
    Next,
    Last,
}

/// Next page number after `nav`, saturating at both ends.
pub fn navigate(current: usize, total_pages: usize, nav: Navigation) -> usize {
    let total_pages = total_pages.max(1);
    let current = clamp_page(current, total_pages);
    match nav {
        Navigation::First => 1,
        Navigation::Prev => current.saturating_sub(1).max(1),
        Navigation::Next => (current + 1).min(total_pages),
        Navigation::Last => total_pages,
    }
}
