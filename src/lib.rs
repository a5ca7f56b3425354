#![doc(test(attr(deny(warnings))))]

//! GotoGuys Core offers the reservation, suggestion, and checkout primitives
//! that power the GotoGuys team-name branding product and its CLIs.

pub mod checkout;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("GotoGuys Core tracing initialized.");
    });
}
