//! LLM trait implementation for the Gemini provider.

use crate::{Gemini, Request, Response};
use llm::{Domain, LLM, Language, ProviderError, compose};

impl Gemini {
    /// Build the request body for one call.
    pub fn request(&self, prompt: &str, context: Option<&str>, language: Language) -> Request {
        let system = Domain::General.system_prompt(language);
        let text = format!("{system}\n\n{}", compose(prompt, context));
        Request::new(&self.config, text)
    }
}

impl LLM for Gemini {
    fn name(&self) -> &str {
        "gemini"
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
        response.into_text().ok_or_else(|| {
            ProviderError::malformed(self.name(), "missing candidates[0].content.parts[0].text")
        })
    }
}
