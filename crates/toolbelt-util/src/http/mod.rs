//! Generic HTTP response envelope.

mod response;
mod status;

pub use response::CommonResponse;
pub use status::HttpStatusCode;
