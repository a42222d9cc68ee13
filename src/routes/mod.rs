//! HTTP route handlers

pub mod docs;
pub mod status;
