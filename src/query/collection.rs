//! Filtering, ordering and grouping of content entries.

use std::cmp::Reverse;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::content::{Entry, Status};
use crate::utils::date::DateTimeUtc;

/// What the query helpers need to know about an item.
pub trait Publishable {
    fn status(&self) -> Option<Status>;
    fn pub_date(&self) -> DateTimeUtc;
    fn updated_date(&self) -> Option<DateTimeUtc>;
    fn categories(&self) -> &[String];

    /// Update date if present, else publication date, in whole seconds.
    fn recency_key(&self) -> i64 {
        self.updated_date()
            .unwrap_or_else(|| self.pub_date())
            .unix_seconds()
    }

    /// No status counts as published.
    fn is_published(&self) -> bool {
        matches!(self.status(), None | Some(Status::Published))
    }
}

impl Publishable for Entry {
    fn status(&self) -> Option<Status> {
        self.meta.status
    }

    fn pub_date(&self) -> DateTimeUtc {
        self.meta.pub_date
    }

    fn updated_date(&self) -> Option<DateTimeUtc> {
        self.meta.updated_date
    }

    fn categories(&self) -> &[String] {
        &self.meta.categories
    }
}

impl<T: Publishable> Publishable for &T {
    fn status(&self) -> Option<Status> {
        (**self).status()
    }

    fn pub_date(&self) -> DateTimeUtc {
        (**self).pub_date()
    }

    fn updated_date(&self) -> Option<DateTimeUtc> {
        (**self).updated_date()
    }

    fn categories(&self) -> &[String] {
        (**self).categories()
    }
}

// =============================================================================
// Filter / sort
// =============================================================================

/// Keep entries whose status is absent or `published`, in input order.
pub fn filter_published<T: Publishable>(entries: impl IntoIterator<Item = T>) -> Vec<T> {
    entries.into_iter().filter(Publishable::is_published).collect()
}

/// Newest first by [`Publishable::recency_key`]. Stable: equal keys keep
/// their input order.
pub fn sort_by_recency<T: Publishable>(entries: &mut [T]) {
    entries.sort_by_key(|e| Reverse(e.recency_key()));
}

/// Newest first by publication date only, ignoring updates.
pub fn sort_by_pub_date<T: Publishable>(entries: &mut [T]) {
    entries.sort_by_key(|e| Reverse(e.pub_date()));
}

/// Published entries, newest first.
pub fn sorted_published<T: Publishable>(entries: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut published = filter_published(entries);
    sort_by_recency(&mut published);
    published
}

/// The most recent entry, first one wins on ties.
pub fn latest<T: Publishable>(entries: &[T]) -> Option<&T> {
    entries.iter().fold(None, |best: Option<&T>, e| match best {
        Some(b) if b.recency_key() >= e.recency_key() => Some(b),
        _ => Some(e),
    })
}

// =============================================================================
// Categories
// =============================================================================

/// Unique categories in first-seen order.
pub fn categories<T: Publishable>(entries: &[T]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    entries
        .iter()
        .flat_map(Publishable::categories)
        .filter(|c| seen.insert(c.as_str()))
        .cloned()
        .collect()
}

/// Entries tagged with `category`, in input order.
pub fn by_category<'a, T: Publishable>(entries: &'a [T], category: &str) -> Vec<&'a T> {
    entries
        .iter()
        .filter(|e| e.categories().iter().any(|c| c == category))
        .collect()
}

// =============================================================================
// Grouping
// =============================================================================

/// Items sharing one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearGroup<T> {
    pub year: i32,
    pub items: Vec<T>,
}

/// Bucket items by `year_of`. Buckets appear in first-seen order and keep
/// their items in input order.
pub fn group_by_year<T, F>(items: impl IntoIterator<Item = T>, mut year_of: F) -> Vec<YearGroup<T>>
where
    F: FnMut(&T) -> i32,
{
    let mut groups: Vec<YearGroup<T>> = Vec::new();
    let mut index: FxHashMap<i32, usize> = FxHashMap::default();

    for item in items {
        let year = year_of(&item);
        match index.get(&year) {
            Some(&i) => groups[i].items.push(item),
            None => {
                index.insert(year, groups.len());
                groups.push(YearGroup {
                    year,
                    items: vec![item],
                });
            }
        }
    }

    groups
}

/// Talks split for the talks page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TalkSchedule<T> {
    pub upcoming: Vec<T>,
    pub past: Vec<YearGroup<T>>,
}

/// Sort talks newest first, then split off upcoming ones and group the rest
/// by year.
pub fn split_talks(mut talks: Vec<Entry>) -> TalkSchedule<Entry> {
    sort_by_pub_date(&mut talks);
    let (upcoming, past): (Vec<_>, Vec<_>) = talks.into_iter().partition(|t| t.meta.upcoming);
    TalkSchedule {
        upcoming,
        past: group_by_year(past, |t| i32::from(t.meta.pub_date.year)),
    }
}
