//! LLM trait implementation for the chat-completions provider.

use crate::{OpenAI, Request, Response, Style};
use llm::{Domain, LLM, Language, Message, ProviderError, compose};

impl OpenAI {
    /// Build the request body for one call.
    pub fn request(&self, prompt: &str, context: Option<&str>, language: Language) -> Request {
        let system = Domain::General.system_prompt(language);
        let user = compose(prompt, context);
        let messages = match self.style {
            Style::Chat => vec![Message::system(system), Message::user(user)],
            Style::Search => vec![Message::user(format!("{system}\n\n{user}"))],
        };
        Request::new(&self.config, messages)
    }
}

impl LLM for OpenAI {
    fn name(&self) -> &str {
        &self.name
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
        let response: Response = self.http.send(&self.name, &body).await?;
        response.into_text().ok_or_else(|| {
            ProviderError::malformed(self.name.as_str(), "missing choices[0].message.content")
        })
    }
}
