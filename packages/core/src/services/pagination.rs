//! Page slicing over ordered result sets
//!
//! Pages are 1-indexed windows of `page_size` items. Deciding what an empty
//! page means (usually "resource not found") is the caller's job.

/// Number of questions per page in every listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Return `items[(page - 1) * page_size .. page * page_size]`, clipped to the
/// end of `items`.
///
/// Page 0 and pages starting past the end yield an empty vector.
///
/// # Examples
///
/// ```rust
/// # use trivia_core::services::pagination::paginate;
/// let items: Vec<u32> = (1..=23).collect();
/// assert_eq!(paginate(3, 10, &items), vec![21, 22, 23]);
/// assert!(paginate(4, 10, &items).is_empty());
/// ```
pub fn paginate<T: Clone>(page: u32, page_size: usize, items: &[T]) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }

    let start = (page as usize - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(page_size).min(items.len());

    items[start..end].to_vec()
}

/// Page number from a raw `?page=` value
///
/// Absent or non-numeric values fall back to page 1. Numeric values below 1
/// map to page 0 and values past `u32::MAX` saturate, so both produce an empty
/// page rather than silently serving page 1.
pub fn page_from_query(raw: Option<&str>) -> u32 {
    let Some(value) = raw.map(str::trim) else {
        return 1;
    };

    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return 1;
    }

    match value.parse::<i64>() {
        Ok(page) if page < 1 => 0,
        Ok(page) => u32::try_from(page).unwrap_or(u32::MAX),
        Err(_) if value.starts_with('-') => 0,
        Err(_) => u32::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_matches_slice_for_every_page() {
        let items: Vec<usize> = (0..37).collect();

        for page in 1..=6u32 {
            let start = ((page - 1) as usize * QUESTIONS_PER_PAGE).min(items.len());
            let end = (page as usize * QUESTIONS_PER_PAGE).min(items.len());
            assert_eq!(
                paginate(page, QUESTIONS_PER_PAGE, &items),
                items[start..end].to_vec(),
                "page {}",
                page
            );
        }
    }

    #[test]
    fn test_paginate_full_first_page() {
        let items: Vec<usize> = (0..19).collect();
        assert_eq!(paginate(1, 10, &items), (0..10).collect::<Vec<_>>());
        assert_eq!(paginate(2, 10, &items), (10..19).collect::<Vec<_>>());
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let items: Vec<usize> = (0..19).collect();
        assert!(paginate(3, 10, &items).is_empty());
        assert!(paginate(100, 10, &items).is_empty());
    }

    #[test]
    fn test_paginate_exact_boundary() {
        let items: Vec<usize> = (0..20).collect();
        assert_eq!(paginate(2, 10, &items).len(), 10);
        assert!(paginate(3, 10, &items).is_empty());
    }

    #[test]
    fn test_paginate_page_zero_is_empty() {
        let items = vec![1, 2, 3];
        assert!(paginate(0, 10, &items).is_empty());
    }

    #[test]
    fn test_paginate_empty_input() {
        let items: Vec<u8> = Vec::new();
        assert!(paginate(1, 10, &items).is_empty());
    }

    #[test]
    fn test_paginate_huge_page_does_not_overflow() {
        let items = vec![1, 2, 3];
        assert!(paginate(u32::MAX, usize::MAX, &items).is_empty());
    }

    #[test]
    fn test_page_from_query() {
        assert_eq!(page_from_query(None), 1);
        assert_eq!(page_from_query(Some("3")), 3);
        assert_eq!(page_from_query(Some(" 2 ")), 2);
        assert_eq!(page_from_query(Some("abc")), 1);
        assert_eq!(page_from_query(Some("")), 1);
        assert_eq!(page_from_query(Some("1.5")), 1);
        assert_eq!(page_from_query(Some("0")), 0);
    }

    #[test]
    fn test_page_from_query_out_of_range_pages_are_empty() {
        let items: Vec<usize> = (0..19).collect();

        for raw in ["-1", "-4", "-99999999999999999999", "99999999999", "99999999999999999999"] {
            let page = page_from_query(Some(raw));
            assert!(
                paginate(page, QUESTIONS_PER_PAGE, &items).is_empty(),
                "page {:?} should be empty",
                raw
            );
        }
        assert_eq!(page_from_query(Some("-1")), 0);
        assert_eq!(page_from_query(Some("+2")), 2);
        assert_eq!(page_from_query(Some("4294967296")), u32::MAX);
    }
}
