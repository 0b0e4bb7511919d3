//! Generate Text - View Component

use super::view_model::{GenerateTextVm, ResultDisplay, FAILURE_MESSAGE, PENDING_MESSAGE};
use crate::shared::components::ui::{Button, Select, Textarea};
use crate::shared::config::AppConfig;
use contracts::enums::GenerationModel;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn GenerateTextForm() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::from_env);
    let vm = GenerateTextVm::new(&config);

    let model_options: Vec<(String, String)> = GenerationModel::all()
        .into_iter()
        .map(|m| (m.code().to_string(), m.display_name().to_string()))
        .collect();
    let model_code = Signal::derive(move || vm.model.get().code().to_string());
    let display = vm.display();

    view! {
        <div class="app-container">
            <form novalidate=true autocomplete="off" on:submit=|ev| ev.prevent_default()>
                <h1>"GPT-2 Text Generation"</h1>
                <Select
                    id="model-select"
                    label="Model"
                    value=model_code
                    options=model_options
                    on_change=Callback::new(move |code: String| vm.set_model_code(&code))
                />
                <Textarea
                    id="prompt"
                    label="Write something..."
                    rows=4
                    value=vm.text
                    on_input=Callback::new(move |text: String| vm.text.set(text))
                />
                <Button class="form__submit" on_click=Callback::new(move |_| vm.submit())>
                    "Generate"
                </Button>
            </form>

            {move || match display.get() {
                ResultDisplay::Idle => None,
                ResultDisplay::Pending => Some(view! {
                    <div class="result pending">{PENDING_MESSAGE}</div>
                }.into_any()),
                ResultDisplay::Failed => Some(view! {
                    <div class="result error">{FAILURE_MESSAGE}</div>
                }.into_any()),
                ResultDisplay::Generated(text) => Some(view! {
                    <div class="result valid">{text}</div>
                }.into_any()),
            }}
        </div>
    }
}
