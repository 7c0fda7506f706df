//! Lumethis: a role-scoped training dashboard for a multi-subsidiary group.
//!
//! Group administrators review program submissions from every subsidiary;
//! subsidiary managers only ever see their own unit's submissions.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod identity;
pub mod telemetry;
pub mod workflows;
