//! Transport layer (HTTP).
//!
//! Exposes the request handlers mounted by `router`.

pub mod http;
