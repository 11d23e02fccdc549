use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        advice_service::AdviceService,
        completion::{CompletionInvoker, CompletionProvider, OpenAiCompletionProvider},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub advice_service: Arc<AdviceService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let provider = Arc::new(OpenAiCompletionProvider::new(&config));
        Self::with_provider(config, provider)
    }

    /// Builds the state around any provider; tests pass a double here.
    pub fn with_provider(config: Config, provider: Arc<dyn CompletionProvider>) -> Self {
        let invoker = CompletionInvoker::new(provider, config.llm_model.clone(), config.llm_timeout());
        let advice_service = Arc::new(AdviceService::new(invoker));

        Self {
            advice_service,
            config: Arc::new(config),
        }
    }
}
