//! Example client that reads and remediates token approvals for an operator.

pub mod config;
