use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Slice boundaries and cursors for one list page.
///
/// `page` is 0-based, `current` is what callers see (1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageBounds {
    pub page: usize,
    pub current: usize,
    pub start: usize,
    pub end: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageBounds {
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.start.min(items.len());
        let end = self.end.min(items.len());
        &items[start..end]
    }

    pub fn next_page(&self) -> Option<usize> {
        self.has_next.then(|| self.current.saturating_add(1))
    }

    pub fn prev_page(&self) -> Option<usize> {
        self.has_prev.then(|| self.current - 1)
    }
}

/// Computes the page window for `requested` (1-based, `None` for absent or
/// unparsable input) over `total` records.
///
/// The next cursor is only offered while a record exists a full page past
/// the end of this page (`end + page_size < total`). Clients depend on this
/// lookahead, so it is kept as is.
pub fn paginate(total: usize, requested: Option<i64>, page_size: usize) -> PageBounds {
    let requested = requested.unwrap_or(1);
    let page = usize::try_from(requested.saturating_sub(1).max(0)).unwrap_or(usize::MAX);
    let current = page.saturating_add(1);
    let start = page.saturating_mul(page_size);
    let end = current.saturating_mul(page_size);

    PageBounds {
        page,
        current,
        start,
        end,
        has_next: end.saturating_add(page_size) < total,
        has_prev: current != 1 && start < total,
    }
}

pub fn page_link(route: &str, page: usize) -> String {
    format!("/{route}/?page={page}")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    pub page: usize,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl PaginationInfo {
    pub fn from_bounds(route: &str, bounds: &PageBounds) -> Self {
        Self {
            page: bounds.current,
            next: bounds.next_page().map(|p| page_link(route, p)),
            prev: bounds.prev_page().map(|p| page_link(route, p)),
        }
    }
}
