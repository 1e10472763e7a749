//! Scheme listing pagination
//!
//! A page is fetched together with a one-item probe at the next offset, so
//! the "send MORE" affordance is only offered when another page exists.

use crate::repository::{RepoResult, Repository, SchemeQuery, SchemeRecord};

/// Items per page
pub const PAGE_SIZE: usize = 10;

/// Keyword that continues a listing
const MORE_KEYWORD: &str = "more";

/// One rendered slice of a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Offset of the first item
    pub offset: usize,
    /// Whether the probe found an item past this page
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Offset the next page starts at
    pub fn next_offset(&self) -> usize {
        self.offset + PAGE_SIZE
    }
}

/// Whether an input in the pagination state asks for the next page
pub fn is_continuation(input: &str) -> bool {
    let input = input.trim();
    input == "1" || input.eq_ignore_ascii_case(MORE_KEYWORD)
}

/// Fetch a page of schemes starting at `offset` and probe for the next one.
///
/// The probe is skipped when the page itself came back short.
pub async fn load_page<R>(repo: &R, tenant_id: &str, offset: usize) -> RepoResult<Page<SchemeRecord>>
where
    R: Repository + ?Sized,
{
    let query = SchemeQuery {
        limit: PAGE_SIZE,
        offset,
        ..SchemeQuery::default()
    };
    let items = repo.schemes(tenant_id, &query).await?;

    let has_more = if items.len() < PAGE_SIZE {
        false
    } else {
        let probe = SchemeQuery {
            limit: 1,
            offset: offset + PAGE_SIZE,
            ..SchemeQuery::default()
        };
        !repo.schemes(tenant_id, &probe).await?.is_empty()
    };

    Ok(Page { items, offset, has_more })
}
