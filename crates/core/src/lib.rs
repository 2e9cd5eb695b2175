//! Domain layer for the product catalog service.
//!
//! Holds the product model, its validation rules, and the domain error type.
//! This crate has no knowledge of HTTP or of any persistence backend.

pub mod error;
pub mod product;
pub mod types;
