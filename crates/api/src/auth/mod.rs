//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 access-token validation, plus issuance for tests and
//!   operator tooling.

pub mod jwt;
