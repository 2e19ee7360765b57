use super::PaginationParams;

/// Normalize caller-supplied pagination values.
///
/// Missing values take the defaults; `page` is raised to at least 1 and
/// `per_page` is clamped into `1..=max_per_page`.
pub fn validate_pagination(
    page: Option<i64>,
    per_page: Option<i64>,
    default_per_page: u32,
    max_per_page: u32,
) -> PaginationParams {
    let max_per_page = max_per_page.max(1);
    let page = page.unwrap_or(1).clamp(1, i64::from(u32::MAX));
    let per_page = per_page
        .unwrap_or(i64::from(default_per_page))
        .clamp(1, i64::from(max_per_page));

    PaginationParams {
        page: u32::try_from(page).unwrap_or(u32::MAX),
        per_page: u32::try_from(per_page).unwrap_or(max_per_page),
    }
}
