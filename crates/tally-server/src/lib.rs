//! tally server library entry.
//!
//! This crate wires storage, the counter service, the hypermedia presenter
//! and the HTTP layer into a single axum application. It is consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod http;
pub mod obs;
pub mod ops;
pub mod presenter;
pub mod router;
pub mod seed;
pub mod service;
pub mod storage;
