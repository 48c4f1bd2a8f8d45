//! Integration tests for fieldcheck.
//!
//! One binary, one module per engine layer.

mod chain;
mod coercion;
mod session;
