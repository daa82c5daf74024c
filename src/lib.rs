//! Player account service: usernames, profiles and balances over HTTP.
//!
//! Layers follow the usual split: `domain` (rules, no I/O), `application`
//! (use cases), `infrastructure` (storage, observability), `interfaces`
//! (HTTP, CLI) and `shared` (constants, metrics).

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;
