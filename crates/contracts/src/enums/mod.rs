pub mod generation_model;

pub use generation_model::GenerationModel;
