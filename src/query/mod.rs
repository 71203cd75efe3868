//! Collection queries and pagination over loaded entries.
//!
//! Everything here is pure: entries in, derived lists out.

mod collection;
mod paginate;

pub use collection::{
    Publishable, TalkSchedule, YearGroup, by_category, categories, filter_published, group_by_year,
    latest, sort_by_pub_date, sort_by_recency, sorted_published, split_talks,
};
pub use paginate::{PAGE_SIZE, PageRequest, PageWindow, page_numbers, paginate, total_pages};
