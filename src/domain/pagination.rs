// src/domain/pagination.rs

/// Normalised page request. Page numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub const DEFAULT_PER_PAGE: u32 = 15;
    pub const MAX_PER_PAGE: u32 = 100;

    pub fn new(page: u32, per_page: u32) -> Self {
        let page = page.max(1);
        let per_page = if per_page == 0 {
            Self::DEFAULT_PER_PAGE
        } else {
            per_page.min(Self::MAX_PER_PAGE)
        };
        Self { page, per_page }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_PER_PAGE)
    }
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page(),
            per_page: request.per_page(),
            total,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            u32::try_from(self.total.div_ceil(u64::from(self.per_page))).unwrap_or(u32::MAX)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_per_page_falls_back_to_default() {
        let request = PageRequest::new(1, 0);
        assert_eq!(request.per_page(), PageRequest::DEFAULT_PER_PAGE);
    }

    #[test]
    fn per_page_is_capped() {
        let request = PageRequest::new(1, 10_000);
        assert_eq!(request.per_page(), PageRequest::MAX_PER_PAGE);
    }

    #[test]
    fn offset_accounts_for_page_number() {
        let request = PageRequest::new(3, 20);
        assert_eq!(request.offset(), 40);
        assert_eq!(request.limit(), 20);
    }

    #[test]
    fn total_pages_rounds_up() {
        let page = Page::new(Vec::<i64>::new(), PageRequest::new(1, 15), 31);
        assert_eq!(page.total_pages(), 3);
    }
}
