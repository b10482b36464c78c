//! LLM trait implementation for the Claude (Anthropic) provider.

use crate::{Claude, Request, Response};
use llm::{Domain, LLM, Language, ProviderError, compose};

impl Claude {
    /// Build the request body for one call.
    pub fn request(&self, prompt: &str, context: Option<&str>, language: Language) -> Request {
        Request::new(
            &self.config,
            Domain::General.system_prompt(language),
            compose(prompt, context),
        )
    }
}

impl LLM for Claude {
    fn name(&self) -> &str {
        "claude"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(
        &self,
        prompt: &str,
        context: Option<&str>,
        language: Language,
    ) -> Result<String, ProviderError> {
        let body = self.request(prompt, context, language);
        let response: Response = self.http.send(self.name(), &body).await?;
        response
            .into_text()
            .ok_or_else(|| ProviderError::malformed(self.name(), "missing content[0].text"))
    }
}
