//! Interaction routing for the Vignette excerpt bot.
//!
//! The chat transport turns user actions into [`InteractionEvent`]s, the
//! [`Router`] applies them to the catalog and the add-work dialogue, and the
//! resulting [`Response`] goes back to the transport for delivery.

#![warn(missing_docs)]

mod action;
mod config;
mod console;
mod event;
mod response;
mod router;

pub use action::ActionRef;
pub use config::{BotConfig, parse_admin_id};
pub use console::{format_response, parse_line, run_console};
pub use event::InteractionEvent;
pub use response::{
    Button, Menu, Quote, QuoteOrigin, Response, render_denied, render_menu,
    render_nothing_available, render_reply, render_stale_menu,
};
pub use router::Router;
