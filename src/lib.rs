//! This crate provides the model behind a month-view calendar.
//!
//! Events are loaded once from an external [`EventSource`](traits::EventSource) (an HTTP [`Client`](client::Client), a [`LocalFile`](local::LocalFile)...) into an [`EventStore`].
//! A load failure is never fatal: the store simply stays empty and remembers what went wrong.
//!
//! The [`grid`] module computes the cells of a month (always whole weeks, starting on Sunday) and groups the events by day. \
//! These functions are pure. The mutable view state (reference month, selected day) lives in a [`CalendarView`], that hands out immutable [`MonthSnapshot`](view::MonthSnapshot)s.

pub mod traits;

mod event;
pub use event::Event;
mod month;
pub use month::Month;
pub mod grid;
pub use grid::Cell;
pub mod store;
pub use store::EventStore;
pub use store::LoadOutcome;
pub mod view;
pub use view::CalendarView;

pub mod client;
pub mod local;
pub mod mock_behaviour;

pub mod config;
pub mod utils;
