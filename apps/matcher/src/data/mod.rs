pub mod loader;
pub mod validation;

pub use loader::SurveyData;
