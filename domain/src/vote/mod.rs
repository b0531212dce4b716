//! Candidate reduction by plurality vote

pub mod plurality;
