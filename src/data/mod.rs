//! Venue data and derived display values.
//!
//! ## Submodules
//!
//! - [`venue`]: Venue records and the read-only [`Directory`]
//! - [`schedule`]: Prayer grid and tab content derivation
//! - [`links`]: Website and map-search links
//!
//! ## Data Flow
//!
//! ```text
//! Directory (built-in or --venues file)
//!        │
//!        ▼
//! ViewState ──▶ schedule::content()
//!                     │
//!                     ├──▶ Content::Schedule { venue, rows }
//!                     └──▶ Content::Empty | Events | About
//! ```

pub mod links;
pub mod schedule;
pub mod venue;

pub use links::maps_url;
pub use schedule::{content, prayer_rows, Content, PrayerRow};
pub use venue::{Directory, DirectoryError, Prayer, ScheduledTimes, Venue};
