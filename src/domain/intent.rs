use std::fmt;

/// Output format the user asked for, as decided by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputIntent {
    Pdf,
    Excel,
    Doc,
    Text,
}

impl OutputIntent {
    /// Intent used when the classifier reply is outside the closed set.
    pub const DEFAULT: Self = Self::Text;

    pub fn from_reply(reply: &str) -> Self {
        let token = reply
            .trim()
            .trim_matches(|c: char| !c.is_ascii_alphanumeric())
            .to_ascii_lowercase();

        match token.as_str() {
            "pdf" => Self::Pdf,
            "excel" => Self::Excel,
            "doc" => Self::Doc,
            "text" => Self::Text,
            _unrecognized => Self::DEFAULT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
            Self::Doc => "doc",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
