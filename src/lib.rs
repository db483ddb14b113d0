//! Holiday clock for a 128x64 monochrome OLED.
//!
//! Shows the local date and time and the nearest upcoming Indonesian national
//! holiday, fetched one year at a time from a public JSON API.
//!
//! ### Usage
//! The firmware binary wires the hardware up; everything here runs on the
//! host as well:
//!
//! 1. implement [`source::HolidaySource`] for the transport
//! 1. build an [`app::App`] with a [`selector::ClosestHolidaySelector`]
//! 1. each tick, pass the current local time to [`app::App::tick`] and draw
//!    the returned [`screen::Frame`] onto any `embedded-graphics` target

pub mod app;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod holiday;
pub mod locale;
pub mod screen;
pub mod selector;
pub mod source;

pub use crate::app::App;
pub use crate::catalog::{HolidayCatalog, IngestReport};
pub use crate::clock::{ClockSource, OffsetClock};
pub use crate::config::Config;
pub use crate::error::{DateParseError, FetchError};
pub use crate::holiday::Holiday;
pub use crate::screen::Frame;
pub use crate::selector::{ClosestHolidaySelector, MatchPolicy};
pub use crate::source::{HolidaySource, RawHoliday};
