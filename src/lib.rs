//! Vacation Entitlement Engine
//!
//! This crate computes how many vacation days each employee on a roster is
//! entitled to in a given year: a minimum entitlement, an age bonus, special
//! contract overrides and pro-rated accrual for newcomers, with an audit trace
//! of every rule decision. Rosters come from CSV files or the HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod processor;
pub mod table;
