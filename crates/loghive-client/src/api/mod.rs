//! API endpoint modules.

mod alerts;
mod ingest_tokens;
mod notifiers;
mod parsers;
mod repositories;

pub use alerts::AlertApi;
pub use ingest_tokens::IngestTokenApi;
pub use notifiers::NotifierApi;
pub use parsers::ParserApi;
pub use repositories::RepositoryApi;
