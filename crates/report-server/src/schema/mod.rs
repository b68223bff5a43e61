//! API schema types for request/response definitions.
//!
//! [`reports`] covers the JSON surface, [`pages`] the HTML form and listing
//! routes. Types use serde derives for (de)serialization.

pub mod pages;
pub mod reports;
