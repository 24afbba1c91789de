/// Listings per page in the browser.
pub const PAGE_SIZE: usize = 6;

pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Items on 1-based `page`. Pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Page buttons are only offered when there is more than one page.
pub fn shows_page_buttons(total: usize) -> bool {
    page_count(total) > 1
}

/// Whether a page button press should change the current page.
pub fn can_select(page: usize, current: usize, total: usize) -> bool {
    page >= 1 && page <= page_count(total) && page != current
}
