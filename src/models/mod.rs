//! Core data models for the Vacation Entitlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod entitlement;
mod raw_row;

pub use employee::{Employee, EmployeeRecord};
pub use entitlement::{
    AuditStep, AuditTrace, AuditWarning, EntitlementResult, INVALID_CONTRACT, INVALID_ROW,
    IRREGULAR_START_DAY, NOT_STARTED,
};
pub use raw_row::RawRow;
