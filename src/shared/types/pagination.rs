/// Pagination window after clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    /// 1-based page number
    pub page: u32,
    pub per_page: u32,
}

impl PaginationParams {
    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.per_page as usize)
    }
}

/// Paginated result wrapper
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, params: PaginationParams) -> Self {
        let total_pages = total.div_ceil(u64::from(params.per_page.max(1)));
        Self {
            items,
            total,
            page: params.page,
            per_page: params.per_page,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PaginationParams { page: 1, per_page: 10 }.offset(), 0);
        assert_eq!(PaginationParams { page: 3, per_page: 2 }.offset(), 4);
    }

    #[test]
    fn total_pages_rounds_up() {
        let params = PaginationParams { page: 1, per_page: 2 };
        assert_eq!(PaginatedResult::<()>::new(vec![], 3, params).total_pages, 2);
        assert_eq!(PaginatedResult::<()>::new(vec![], 4, params).total_pages, 2);
        assert_eq!(PaginatedResult::<()>::new(vec![], 0, params).total_pages, 0);
    }
}
