//! Asynchronous request-state adapter
//!
//! Structure:
//! - descriptor.rs: RequestDescriptor (target, method, body)
//! - error.rs: EndpointError
//! - transport.rs: Transport seam and the fetch-backed implementation
//! - endpoint.rs: AsyncEndpoint, the stateful trigger

mod descriptor;
mod endpoint;
mod error;
mod transport;

pub use descriptor::{HttpMethod, RequestDescriptor};
pub use endpoint::AsyncEndpoint;
pub use error::EndpointError;
pub use transport::{FetchTransport, Transport};
