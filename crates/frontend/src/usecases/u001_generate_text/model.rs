//! Generate Text - Model Layer

use crate::shared::async_endpoint::{AsyncEndpoint, FetchTransport, RequestDescriptor, Transport};
use crate::shared::config::AppConfig;
use contracts::usecases::u001_generate_text::{GenerateTextRequest, GenerateTextResponse};
use std::rc::Rc;

pub type GenerateTextEndpoint = AsyncEndpoint<GenerateTextRequest, GenerateTextResponse>;

/// Endpoint posting prompts to the configured generation service
pub fn generate_text_endpoint(config: &AppConfig) -> GenerateTextEndpoint {
    generate_text_endpoint_with(config, Rc::new(FetchTransport))
}

pub(super) fn generate_text_endpoint_with(
    config: &AppConfig,
    transport: Rc<dyn Transport>,
) -> GenerateTextEndpoint {
    let url = config.endpoint_url.clone();
    AsyncEndpoint::new(
        move |request: GenerateTextRequest| RequestDescriptor::post(url.clone()).with_json(&request),
        transport,
    )
}
