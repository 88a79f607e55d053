//! Small stateless helpers: JSON document merging, date/time handling and
//! HTTP response envelopes.

pub mod http;
pub mod json;
pub mod time;
