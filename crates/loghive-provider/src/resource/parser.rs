//! Parser resources.

use loghive_client::LoghiveClient;
use loghive_core::{Parser, ParserTestCase, Result};
use tracing::info;

use crate::provider::parse_composite_id;

/// Flat configuration record for one parser resource instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Repository owning the parser
    pub repository: String,

    /// Parser name
    pub name: String,

    /// Parser script source
    pub parser_script: String,

    /// Fields used as tags for events handled by this parser
    pub tag_fields: Vec<String>,

    /// Sample event lines used to verify the parser
    pub test_data: Vec<String>,
}

impl ParserConfig {
    /// The composite identifier of this parser
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}+{}", self.repository, self.name)
    }
}

/// Build the domain parser from a flat configuration record
#[must_use]
pub fn parser_from_config(config: &ParserConfig) -> Parser {
    Parser {
        name: config.name.clone(),
        script: config.parser_script.clone(),
        tag_fields: config.tag_fields.clone(),
        tests: config
            .test_data
            .iter()
            .map(|input| ParserTestCase::new(input.clone()))
            .collect(),
    }
}

/// Populate a flat configuration record from the authoritative parser
#[must_use]
pub fn config_from_parser(parser: &Parser, repository: impl Into<String>) -> ParserConfig {
    ParserConfig {
        repository: repository.into(),
        name: parser.name.clone(),
        parser_script: parser.script.clone(),
        tag_fields: parser.tag_fields.clone(),
        test_data: parser.tests.iter().map(|test| test.input.clone()).collect(),
    }
}

/// CRUD handler for parser resources
pub struct ParserResource<'a> {
    client: &'a LoghiveClient,
}

impl<'a> ParserResource<'a> {
    pub(crate) fn new(client: &'a LoghiveClient) -> Self {
        Self { client }
    }

    /// Create the parser and return the reconciled configuration
    pub async fn create(&self, config: &ParserConfig) -> Result<ParserConfig> {
        let parser = parser_from_config(config);
        self.client
            .parsers()
            .add(&config.repository, &parser, false)
            .await?;
        info!(repository = %config.repository, name = %parser.name, "created parser");
        self.read(&config.repository, &parser.name).await
    }

    /// Fetch the parser and render it as configuration
    pub async fn read(&self, repository: &str, name: &str) -> Result<ParserConfig> {
        let parser = self.client.parsers().get(repository, name).await?;
        Ok(config_from_parser(&parser, repository))
    }

    /// Resolve a composite id and read the parser it names (import)
    pub async fn read_by_id(&self, id: &str) -> Result<ParserConfig> {
        let (repository, name) = parse_composite_id(id, "REPOSITORYNAME+PARSERNAME")?;
        self.read(repository, name).await
    }

    /// Replace the parser and return the reconciled configuration
    pub async fn update(&self, config: &ParserConfig) -> Result<ParserConfig> {
        let parser = parser_from_config(config);
        self.client
            .parsers()
            .add(&config.repository, &parser, true)
            .await?;
        info!(repository = %config.repository, name = %parser.name, "updated parser");
        self.read(&config.repository, &parser.name).await
    }

    /// Delete the parser
    pub async fn delete(&self, config: &ParserConfig) -> Result<()> {
        self.client
            .parsers()
            .remove(&config.repository, &config.name)
            .await?;
        info!(repository = %config.repository, name = %config.name, "deleted parser");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_maps_to_parser_test_cases() {
        let config = ParserConfig {
            repository: "prod".to_string(),
            name: "json".to_string(),
            parser_script: "parseJson()".to_string(),
            tag_fields: vec!["host".to_string()],
            test_data: vec!["{\"a\":1}".to_string(), "{\"b\":2}".to_string()],
        };

        let parser = parser_from_config(&config);
        assert_eq!(parser.tests.len(), 2);
        assert_eq!(parser.tests[0].input, "{\"a\":1}");

        let rebuilt = config_from_parser(&parser, "prod");
        assert_eq!(rebuilt, config);
    }
}
