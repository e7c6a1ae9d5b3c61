//! # Echo Core
//!
//! The domain layer of Echo Valley.
//! This crate holds the feed's entities, validation rules and port traits,
//! with no runtime or infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{FeedError, ValidationError};
