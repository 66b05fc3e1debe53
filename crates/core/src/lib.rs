//! Domain rules for the portfolio site.
//!
//! Everything here is free of I/O so it can be shared by the repository
//! layer, the HTTP handlers, and the notification dispatcher.

pub mod contact;
pub mod content;
pub mod error;
pub mod pagination;
pub mod slug;
pub mod team;
pub mod types;
