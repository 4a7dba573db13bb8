//! Network layer: wire payloads and REST helpers for the auth backend.

pub mod api;
pub mod types;
