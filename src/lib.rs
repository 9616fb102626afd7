//! Terminal card viewer for PokeAPI records.
//!
//! The UI follows a Model-View-Intent layout: a single [`ui::view::ViewState`]
//! is owned by [`ui::app::App`] and only changes through
//! [`ui::view::ViewReducer`]. Network fetches run on tokio and report back
//! through the event loop.

pub mod api;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod ui;
