//! Sorted, paginated projection of the ledger.
//!
//! Nothing here is stored next to the entries: the display order is derived
//! from the canonical list every time a page is requested.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{Earning, EngineError};

/// Column the list is ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Amount,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Active sort; the default is newest date first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub dir: SortDir,
}

impl SortState {
    #[must_use]
    pub const fn new(key: SortKey, dir: SortDir) -> Self {
        Self { key, dir }
    }

    /// Re-selecting the active key flips the direction, a new key starts
    /// descending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.dir = self.dir.flipped();
        } else {
            self.key = key;
            self.dir = SortDir::Desc;
        }
    }

    fn compare(self, a: &Earning, b: &Earning) -> Ordering {
        let ordering = match self.key {
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Amount => a.amount.cmp(&b.amount),
        };
        match self.dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    }
}

/// Allowed number of rows per page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    Twenty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::Twenty];

    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
        }
    }

    /// Next size in the selector, wrapping 20 back to 5.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Five => Self::Ten,
            Self::Ten => Self::Twenty,
            Self::Twenty => Self::Five,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = EngineError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| EngineError::InvalidPageSize(format!("{value} (allowed: 5, 10, 20)")))
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

/// Parameters of a single list request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub sort: SortState,
    /// 1-based; clamped into range when the page is built.
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            sort: SortState::default(),
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

/// One page of the sorted ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<'a> {
    pub items: Vec<&'a Earning>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Number of pages for `count` rows, never less than one.
#[must_use]
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// Stable sort of `entries` by `sort`; ties keep their canonical order.
pub fn sorted(entries: &[Earning], sort: SortState) -> Vec<&Earning> {
    let mut items: Vec<&Earning> = entries.iter().collect();
    items.sort_by(|a, b| sort.compare(a, b));
    items
}

/// Builds the requested page, clamping `query.page` into `[1, total_pages]`.
pub fn paginate<'a>(entries: &'a [Earning], query: &ListQuery) -> Page<'a> {
    let total_items = entries.len();
    let total_pages = total_pages(total_items, query.page_size);
    let page = query.page.clamp(1, total_pages);
    let size = query.page_size.get();

    let items = sorted(entries, query.sort)
        .into_iter()
        .skip((page - 1) * size)
        .take(size)
        .collect();

    Page {
        items,
        page,
        total_pages,
        total_items,
    }
}

/// Sort and paging state kept by the ledger owner between renders.
///
/// The page goes back to 1 whenever the sort, the page size or the number of
/// entries changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    sort: SortState,
    page: usize,
    page_size: PageSize,
    seen_len: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(SortState::default(), PageSize::default())
    }
}

impl ViewState {
    #[must_use]
    pub const fn new(sort: SortState, page_size: PageSize) -> Self {
        Self {
            sort,
            page: 1,
            page_size,
            seen_len: 0,
        }
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            sort: self.sort,
            page: self.page,
            page_size: self.page_size,
        }
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    pub fn cycle_page_size(&mut self) {
        self.set_page_size(self.page_size.next());
    }

    /// Moves forward, staying on the last page for `count` rows.
    pub fn next_page(&mut self, count: usize) {
        self.page = (self.page + 1).min(total_pages(count, self.page_size));
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Reconciles the page with the current number of entries.
    pub fn sync(&mut self, count: usize) {
        if count != self.seen_len {
            self.seen_len = count;
            self.page = 1;
        }
        self.page = self.page.clamp(1, total_pages(count, self.page_size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EarningId, MoneyCents};
    use uuid::Uuid;

    fn earning(n: u128, cents: i64, date: &str) -> Earning {
        Earning {
            id: EarningId::from_uuid(Uuid::from_u128(n)),
            amount: MoneyCents::new(cents),
            date: date.to_string(),
            note: String::new(),
        }
    }

    fn ids(items: &[&Earning]) -> Vec<u128> {
        items.iter().map(|e| e.id.as_uuid().as_u128()).collect()
    }

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, PageSize::Five), 1);
        assert_eq!(total_pages(5, PageSize::Five), 1);
        assert_eq!(total_pages(6, PageSize::Five), 2);
        assert_eq!(total_pages(12, PageSize::Five), 3);
        assert_eq!(total_pages(20, PageSize::Twenty), 1);
        assert_eq!(total_pages(21, PageSize::Ten), 3);
    }

    #[test]
    fn new_key_starts_descending_and_same_key_flips() {
        let mut sort = SortState::new(SortKey::Date, SortDir::Asc);
        sort.toggle(SortKey::Amount);
        assert_eq!(sort, SortState::new(SortKey::Amount, SortDir::Desc));
        sort.toggle(SortKey::Amount);
        assert_eq!(sort, SortState::new(SortKey::Amount, SortDir::Asc));
        sort.toggle(SortKey::Date);
        assert_eq!(sort, SortState::new(SortKey::Date, SortDir::Desc));
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let entries = vec![
            earning(1, 500, "2024-01-02"),
            earning(2, 100, "2024-01-01"),
            earning(3, 500, "2024-01-02"),
            earning(4, 900, "2024-01-03"),
        ];

        let by_date_desc = sorted(&entries, SortState::default());
        assert_eq!(ids(&by_date_desc), vec![4, 1, 3, 2]);

        let by_amount_asc = sorted(&entries, SortState::new(SortKey::Amount, SortDir::Asc));
        assert_eq!(ids(&by_amount_asc), vec![2, 1, 3, 4]);

        let by_amount_desc = sorted(&entries, SortState::new(SortKey::Amount, SortDir::Desc));
        assert_eq!(ids(&by_amount_desc), vec![4, 1, 3, 2]);
    }

    #[test]
    fn malformed_dates_sort_as_text() {
        let entries = vec![earning(1, 100, "2024-1-9"), earning(2, 100, "2024-01-10")];
        let by_date_desc = sorted(&entries, SortState::default());
        assert_eq!(ids(&by_date_desc), vec![1, 2]);
    }

    #[test]
    fn paginate_clamps_out_of_range_pages() {
        let entries: Vec<Earning> = (1..=7)
            .map(|n| earning(n, 100, &format!("2024-01-{n:02}")))
            .collect();
        let query = ListQuery {
            page: 9,
            ..ListQuery::default()
        };
        let page = paginate(&entries, &query);
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, 7);
        assert_eq!(ids(&page.items), vec![2, 1]);

        let query = ListQuery {
            page: 0,
            ..ListQuery::default()
        };
        assert_eq!(paginate(&entries, &query).page, 1);
    }

    #[test]
    fn paginate_empty_ledger_has_one_empty_page() {
        let page = paginate(&[], &ListQuery::default());
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn page_size_accepts_only_known_values() {
        assert_eq!(PageSize::try_from(10), Ok(PageSize::Ten));
        assert!(matches!(
            PageSize::try_from(7),
            Err(EngineError::InvalidPageSize(_))
        ));
        assert_eq!(PageSize::Twenty.next(), PageSize::Five);
    }

    #[test]
    fn view_state_resets_page_on_changes() {
        let mut view = ViewState::default();
        view.sync(12);
        view.next_page(12);
        view.next_page(12);
        view.next_page(12);
        assert_eq!(view.page(), 3);

        view.toggle_sort(SortKey::Amount);
        assert_eq!(view.page(), 1);

        view.next_page(12);
        view.cycle_page_size();
        assert_eq!(view.page_size(), PageSize::Ten);
        assert_eq!(view.page(), 1);

        view.next_page(12);
        assert_eq!(view.page(), 2);
        view.sync(12);
        assert_eq!(view.page(), 2);
        view.sync(13);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn prev_page_stops_at_first() {
        let mut view = ViewState::default();
        view.prev_page();
        assert_eq!(view.page(), 1);
    }
}
