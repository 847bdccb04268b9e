// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # tampamuslim
//!
//! A terminal viewer for daily iqamah times at Tampa Bay area masjids.
//!
//! The application keeps three pieces of state (selected venue, active
//! section, drawer open) and derives everything it draws from them, so the
//! same state renders identically in the TUI, as plain text, or as JSON.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(derivation)   │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       ▲                                                     │
//! │  ┌────┴────┐                                                │
//! │  │ events  │◀── keys | mouse | resize                       │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: [`ViewState`], drawer policy and the view controller [`App`]
//! - **[`data`]**: The venue [`Directory`], prayer grid derivation, links
//! - **[`events`]**: Key, mouse and resize dispatch
//! - **[`ui`]**: ratatui rendering of the brand bar, drawer and card
//! - **[`settings`]**: Layered configuration
//! - **[`viewport`]**: Terminal width in logical pixels
//!
//! ## Usage
//!
//! ```
//! use tampamuslim::{App, Directory, Tab, Viewport};
//!
//! let mut app = App::new(Directory::builtin(), Some(Viewport::new(1280)));
//! assert!(app.state.drawer_open);
//!
//! app.select_venue("istaba");
//! assert_eq!(app.selected_venue().unwrap().address, "7326 E. Sligh Ave, Tampa, FL");
//!
//! app.select_tab(Tab::About);
//! assert_eq!(app.heading(), "About TampaMuslim");
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod report;
pub mod settings;
pub mod ui;
pub mod viewport;

// Re-export main types for convenience
pub use app::{App, Tab, ViewState};
pub use data::{Content, Directory, DirectoryError, Prayer, PrayerRow, Venue};
pub use settings::{Settings, ThemeChoice};
pub use viewport::Viewport;
