//! Generic list query and page envelope

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::values::parse_number;

/// A closed set of logical names accepted from requests.
///
/// `ENTRIES` is the whole allowlist: the logical name (and any alias) a
/// client may send, mapped to a typed key. Lookup is case-insensitive.
pub trait Allowlist: Sized + Copy + 'static {
    const ENTRIES: &'static [(&'static str, Self)];

    fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ENTRIES
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

/// A sortable field set with a documented fallback
pub trait SortKey: Allowlist {
    const DEFAULT: Self;

    /// Resolve `sortBy`; anything unrecognised falls back to `DEFAULT`.
    fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::lookup).unwrap_or(Self::DEFAULT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// `asc` (any case) sorts ascending; everything else descending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Clamped pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
}

impl Pagination {
    pub const DEFAULT_PAGE_SIZE: u64 = 10;
    pub const MAX_PAGE_SIZE: u64 = 100;

    /// `page` clamps to >= 1, `page_size` to `[1, 100]`. Missing or
    /// non-numeric values take the defaults; nothing is rejected.
    pub fn from_params(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = page.and_then(parse_number).unwrap_or(1).max(1) as u64;
        let page_size = page_size
            .and_then(parse_number)
            .unwrap_or(Self::DEFAULT_PAGE_SIZE as i64)
            .clamp(1, Self::MAX_PAGE_SIZE as i64) as u64;

        Self { page, page_size }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// `max(1, ceil(total / page_size))`
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size).max(1)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// A validated list request for one entity
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<S, F: Ord> {
    pub pagination: Pagination,
    /// Trimmed, non-empty search term
    pub search: Option<String>,
    pub sort: S,
    pub order: SortOrder,
    /// Recognised filters with non-empty values
    pub filters: BTreeMap<F, String>,
}

impl<S, F> ListQuery<S, F>
where
    S: SortKey,
    F: Allowlist + Ord,
{
    const RESERVED: [&'static str; 5] = ["page", "pageSize", "search", "sortBy", "sortOrder"];

    /// Build from flat string parameters. Never fails: malformed numbers
    /// are clamped, unknown sort keys fall back, unknown filters are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str);

        let filters = params
            .iter()
            .filter(|(key, _)| !Self::RESERVED.contains(&key.as_str()))
            .filter_map(|(key, value)| {
                let value = value.trim();
                if value.is_empty() {
                    return None;
                }
                F::lookup(key).map(|filter| (filter, value.to_string()))
            })
            .collect();

        Self {
            pagination: Pagination::from_params(get("page"), get("pageSize")),
            search: get("search")
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            sort: S::resolve(get("sortBy")),
            order: SortOrder::from_param(get("sortOrder")),
            filters,
        }
    }

    pub fn filter(&self, key: F) -> Option<&str> {
        self.filters.get(&key).map(String::as_str)
    }
}

/// List response envelope
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, pagination: &Pagination) -> Self {
        Self {
            data,
            total,
            page: pagination.page,
            page_size: pagination.page_size,
            total_pages: pagination.total_pages(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{ParticipantFilter, ParticipantQuery, ParticipantSort};

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn pagination_defaults() {
        let p = Pagination::from_params(None, None);
        assert_eq!(p.page, 1);
        assert_eq!(p.page_size, 10);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn pagination_clamps_instead_of_rejecting() {
        assert_eq!(Pagination::from_params(Some("0"), None).page, 1);
        assert_eq!(Pagination::from_params(Some("-4"), None).page, 1);
        assert_eq!(Pagination::from_params(Some("abc"), None).page, 1);
        assert_eq!(Pagination::from_params(None, Some("0")).page_size, 1);
        assert_eq!(Pagination::from_params(None, Some("1000")).page_size, 100);
        assert_eq!(Pagination::from_params(None, Some("x")).page_size, 10);
        assert_eq!(Pagination::from_params(Some("2.9"), Some("25.5")).page, 2);
        assert_eq!(Pagination::from_params(Some("2.9"), Some("25.5")).page_size, 25);
    }

    #[test]
    fn offset_follows_page() {
        let p = Pagination::from_params(Some("3"), Some("20"));
        assert_eq!(p.offset(), 40);
        assert_eq!(p.limit(), 20);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let p = Pagination::from_params(Some("9223372036854775807"), Some("100"));
        assert_eq!(p.offset(), u64::MAX);
    }

    #[test]
    fn total_pages_is_at_least_one() {
        for page_size in 1..=100u64 {
            let p = Pagination { page: 1, page_size };
            for total in [0u64, 1, 7, 99, 100, 101, 1000, 12345] {
                let expected = std::cmp::max(1, (total + page_size - 1) / page_size);
                assert_eq!(p.total_pages(total), expected, "total={total} size={page_size}");
            }
        }
    }

    #[test]
    fn sort_order_defaults_to_desc() {
        assert_eq!(SortOrder::from_param(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::from_param(Some("ASC")), SortOrder::Asc);
        assert_eq!(SortOrder::from_param(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::from_param(Some("asc; DROP TABLE x")), SortOrder::Desc);
        assert_eq!(SortOrder::from_param(None), SortOrder::Desc);
    }

    #[test]
    fn unknown_sort_falls_back_to_default() {
        let q = ParticipantQuery::from_params(&params(&[("sortBy", "password_hash")]));
        assert_eq!(q.sort, ParticipantSort::DEFAULT);

        let q = ParticipantQuery::from_params(&params(&[("sortBy", "name; DROP TABLE x")]));
        assert_eq!(q.sort, ParticipantSort::DEFAULT);

        let q = ParticipantQuery::from_params(&params(&[("sortBy", "name")]));
        assert_eq!(q.sort, ParticipantSort::Name);
    }

    #[test]
    fn search_is_trimmed_and_blank_is_ignored() {
        let q = ParticipantQuery::from_params(&params(&[("search", "  batik  ")]));
        assert_eq!(q.search.as_deref(), Some("batik"));

        let q = ParticipantQuery::from_params(&params(&[("search", "   ")]));
        assert_eq!(q.search, None);
    }

    #[test]
    fn filters_keep_known_non_empty_keys() {
        let q = ParticipantQuery::from_params(&params(&[
            ("status", "active"),
            ("city", " "),
            ("province", "Jawa Barat"),
            ("bogus", "1"),
            ("page", "2"),
        ]));

        assert_eq!(q.filters.len(), 2);
        assert_eq!(q.filter(ParticipantFilter::Status), Some("active"));
        assert_eq!(q.filter(ParticipantFilter::Province), Some("Jawa Barat"));
        assert_eq!(q.filter(ParticipantFilter::City), None);
        assert_eq!(q.pagination.page, 2);
    }

    #[test]
    fn page_envelope() {
        let p = Pagination::from_params(Some("2"), Some("10"));
        let page = Page::new(vec![1, 2, 3], 23, &p);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 2);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["total"], 23);
    }
}
