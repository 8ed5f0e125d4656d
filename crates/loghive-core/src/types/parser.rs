use serde::{Deserialize, Serialize};

/// A parser that turns incoming event text into structured fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parser {
    /// Parser name, unique within the owning repository
    pub name: String,

    /// Parser script source
    #[serde(default)]
    pub script: String,

    /// Fields used as tags for events handled by this parser
    #[serde(default)]
    pub tag_fields: Vec<String>,

    /// Sample inputs used to verify the parser
    #[serde(default)]
    pub tests: Vec<ParserTestCase>,
}

/// A single sample input for a parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserTestCase {
    /// Raw event text fed to the parser
    pub input: String,
}

impl ParserTestCase {
    /// Wrap a raw event line as a test case
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
