//! Generate Text UseCase (MVVM Standard)
//!
//! Structure:
//! - model.rs: endpoint binding for POST /generate
//! - view_model.rs: GenerateTextVm with RwSignals, ResultDisplay
//! - view.rs: Main component GenerateTextForm

mod model;
mod view;
mod view_model;

pub use model::{generate_text_endpoint, GenerateTextEndpoint};
pub use view::GenerateTextForm;
pub use view_model::{GenerateTextVm, ResultDisplay};
