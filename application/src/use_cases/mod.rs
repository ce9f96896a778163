//! Use cases - application-level orchestration logic

pub mod run_consultation;
