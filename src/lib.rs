#![doc(test(attr(deny(warnings))))]

//! Commission Core offers the derived-metrics, ranking, statement, and
//! query primitives that power every screen of the consultant dashboard.

pub mod auth;
pub mod config;
pub mod core;
pub mod currency;
pub mod dates;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Commission Core tracing initialized.");
    });
}
