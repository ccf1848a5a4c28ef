use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProvider {
    OpenAi,
    Gemini,
}

impl ModelProvider {
    /// `"openai"` selects OpenAI; every other value, including none, selects Gemini.
    pub fn from_model_type(model_type: Option<&str>) -> Self {
        match model_type {
            Some("openai") => Self::OpenAi,
            _ => Self::Gemini,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }
}

impl fmt::Display for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
