use crate::shared::config::AppConfig;
use crate::usecases::u001_generate_text::GenerateTextForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Endpoint and user id for every form below
    provide_context(AppConfig::from_env());

    view! {
        <GenerateTextForm />
    }
}
