//! Generate Text - ViewModel
//!
//! Reactive state of the prompt form and the mapping from request state to
//! what the result panel shows.

use super::model::{generate_text_endpoint, GenerateTextEndpoint};
use crate::shared::config::AppConfig;
use crate::shared::request_state::RequestState;
use contracts::enums::GenerationModel;
use contracts::usecases::u001_generate_text::{GenerateTextRequest, GenerateTextResponse};
use leptos::prelude::*;
use std::future::Future;

pub const PENDING_MESSAGE: &str = "Please wait";
pub const FAILURE_MESSAGE: &str = "Bad Request";

/// What the result panel renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultDisplay {
    Idle,
    Pending,
    Failed,
    Generated(String),
}

impl ResultDisplay {
    pub fn from_state(state: &RequestState<GenerateTextResponse>) -> Self {
        if state.is_idle() {
            return ResultDisplay::Idle;
        }
        if !state.is_settled() {
            return ResultDisplay::Pending;
        }
        match (&state.data, state.error) {
            (Some(response), false) => ResultDisplay::Generated(response.result.clone()),
            _ => ResultDisplay::Failed,
        }
    }
}

/// ViewModel for the prompt form
#[derive(Clone, Copy)]
pub struct GenerateTextVm {
    pub text: RwSignal<String>,
    pub model: RwSignal<GenerationModel>,
    pub user_id: u32,
    endpoint: StoredValue<GenerateTextEndpoint, LocalStorage>,
}

impl GenerateTextVm {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_endpoint(generate_text_endpoint(config), config.user_id)
    }

    pub fn with_endpoint(endpoint: GenerateTextEndpoint, user_id: u32) -> Self {
        Self {
            text: RwSignal::new(String::new()),
            model: RwSignal::new(GenerationModel::default()),
            user_id,
            endpoint: StoredValue::new_local(endpoint),
        }
    }

    /// Request body from the current input
    pub fn build_request(&self) -> GenerateTextRequest {
        GenerateTextRequest {
            text: self.text.get_untracked(),
            model: self.model.get_untracked(),
            user_id: self.user_id,
        }
    }

    /// Send the current prompt
    pub fn submit(&self) {
        let request = self.build_request();
        self.endpoint.with_value(|endpoint| endpoint.trigger(request));
    }

    /// Like `submit`, but hands back the call instead of spawning it
    pub fn start_submit(&self) -> impl Future<Output = ()> + 'static {
        let request = self.build_request();
        self.endpoint.with_value(|endpoint| endpoint.start(request))
    }

    pub fn state(&self) -> ReadSignal<RequestState<GenerateTextResponse>> {
        self.endpoint.with_value(|endpoint| endpoint.state())
    }

    /// Reactive result panel state
    pub fn display(&self) -> Signal<ResultDisplay> {
        let state = self.state();
        Signal::derive(move || state.with(ResultDisplay::from_state))
    }

    pub fn set_model_code(&self, code: &str) {
        match GenerationModel::from_code(code) {
            Some(model) => self.model.set(model),
            None => log::warn!("unknown model code: {}", code),
        }
    }
}
