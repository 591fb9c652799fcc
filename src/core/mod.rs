//! Request building, transport, and response decoding.

pub mod request;
pub mod response;
pub mod transport;
pub mod xml;
