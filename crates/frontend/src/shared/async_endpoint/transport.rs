use super::descriptor::{HttpMethod, RequestDescriptor};
use super::error::EndpointError;
use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

/// Issues a described request and yields the raw body of a 2xx response
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, descriptor: &RequestDescriptor) -> Result<String, EndpointError>;
}

/// Browser fetch via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    fn builder(descriptor: &RequestDescriptor) -> RequestBuilder {
        let builder = match descriptor.method {
            HttpMethod::Get => Request::get(&descriptor.url),
            HttpMethod::Post => Request::post(&descriptor.url),
            HttpMethod::Put => Request::put(&descriptor.url),
            HttpMethod::Delete => Request::delete(&descriptor.url),
        };
        builder.header("Accept", "application/json")
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, descriptor: &RequestDescriptor) -> Result<String, EndpointError> {
        let builder = Self::builder(descriptor);
        let request = match &descriptor.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| EndpointError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| EndpointError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(EndpointError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| EndpointError::Decode(e.to_string()))
    }
}
