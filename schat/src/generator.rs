//! Reply generation over a `GenerationProvider`.

use std::sync::Arc;

use sprovider::{
    CallPolicy, GenerationOptions, GenerationProvider, GenerationRequest, NoopOperationHooks,
    ProviderOperationHooks, execute_with_timeout,
};

use crate::{ChatError, Persona};

pub const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-pro";

#[derive(Clone)]
pub struct ReplyGenerator {
    provider: Arc<dyn GenerationProvider>,
    persona: Persona,
    model: String,
    options: GenerationOptions,
    policy: CallPolicy,
    hooks: Arc<dyn ProviderOperationHooks>,
}

impl ReplyGenerator {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self {
            provider,
            persona: Persona::sahara(),
            model: DEFAULT_GENERATION_MODEL.to_string(),
            options: GenerationOptions::default(),
            policy: CallPolicy::default(),
            hooks: Arc::new(NoopOperationHooks),
        }
    }

    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_options(mut self, options: GenerationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_policy(mut self, policy: CallPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_hooks(mut self, hooks: Arc<dyn ProviderOperationHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Persona style, blank line, safety protocol, blank line, then the single user turn.
    pub fn build_prompt(persona: &Persona, message: &str) -> String {
        format!(
            "{}\n\n{}\n\nUser: {}\n{}:",
            persona.style, persona.safety_protocol, message, persona.name
        )
    }

    pub async fn generate(&self, message: &str) -> Result<String, ChatError> {
        let prompt = Self::build_prompt(&self.persona, message);
        let request =
            GenerationRequest::new(self.model.clone(), prompt).with_options(self.options);

        let response = execute_with_timeout(
            self.provider.id(),
            "generate",
            &self.policy,
            self.hooks.as_ref(),
            self.provider.generate(request),
        )
        .await?;

        if response.text.trim().is_empty() {
            return Err(ChatError::upstream(format!(
                "{} returned an empty reply",
                response.provider
            )));
        }

        Ok(response.text)
    }
}
