//! Utilities module aggregator exposing path builders, content storage backends, and testing helpers.

pub mod path;
pub mod storage;
