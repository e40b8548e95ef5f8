//! Request-scoped workflows that span several repositories.
//!
//! - [`session_pipeline`] -- validate, check quota, analyze, score, record.

pub mod session_pipeline;
