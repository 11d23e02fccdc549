pub mod advice_service;
pub mod completion;
pub mod normalizer;
pub mod templates;
