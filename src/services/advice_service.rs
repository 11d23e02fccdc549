use crate::{
    errors::AppResult,
    models::{domain::AdviceRequest, dto::response::AdvicePayload},
    services::{
        completion::CompletionInvoker,
        normalizer::{parse_quiz, sanitize_text},
        templates,
    },
};

/// Compile -> invoke -> normalize for one validated request. Holds no per-request state.
pub struct AdviceService {
    invoker: CompletionInvoker,
}

impl AdviceService {
    pub fn new(invoker: CompletionInvoker) -> Self {
        Self { invoker }
    }

    pub async fn generate(&self, request: AdviceRequest) -> AppResult<AdvicePayload> {
        let endpoint = request.endpoint();
        let messages = templates::compile(&request);

        let raw = self.invoker.invoke(endpoint, messages).await.map_err(|e| {
            log::error!("{} completion failed: {}", endpoint, e);
            e
        })?;

        if endpoint.expects_structured_output() {
            let quiz = parse_quiz(&raw).map_err(|e| {
                log::error!("{} returned unparseable output: {}", endpoint, e);
                e
            })?;

            let issues = quiz.quality_issues();
            if !issues.is_empty() {
                log::warn!("{} output has quality issues: {}", endpoint, issues.join("; "));
            }

            return Ok(AdvicePayload::Quiz(quiz));
        }

        AdvicePayload::text(endpoint, sanitize_text(&raw))
    }
}
