//! Shared helpers.
//!
//! | Module   | Purpose                                  |
//! |----------|------------------------------------------|
//! | `date`   | `DateTimeUtc` parsing and formatting     |
//! | `html`   | HTML/XML escaping, element categories    |
//! | `plural` | "1 entry" / "2 entries" style counts     |
//! | `slug`   | URL slugs                                |

pub mod date;
pub mod html;
pub mod plural;
pub mod slug;
