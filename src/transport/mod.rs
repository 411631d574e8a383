//! Network transport: the single-resource fetch primitive.
//!
//! Everything above this module sees one operation, [`HttpTransport::get_json`]:
//! one GET request, one decoded JSON document, one status code. Connection
//! pooling, TLS, and request deadlines are this module's concern alone.

mod http;

pub use http::{HttpTransport, TransportError};
