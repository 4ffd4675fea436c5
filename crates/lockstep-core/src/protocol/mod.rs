//! Wire model for the delay endpoint.
//!
//! - `timing`: the JSON body returned by `GET /test`

pub mod timing;

pub use timing::TimingResult;
