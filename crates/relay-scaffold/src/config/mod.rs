mod config_error;
mod config_resolver;
mod graphql_config;
mod relay_config;
mod schema_extension;
mod schema_loader;

pub use config_error::ConfigError;
pub use config_resolver::CONFIG_NAME;
pub use config_resolver::ConfigResolver;
pub use graphql_config::GraphQLConfig;
pub use relay_config::Pointer;
pub use relay_config::ProjectConfig;
pub use relay_config::RelayConfig;
pub use schema_extension::RelayDirectivesExtension;
pub use schema_extension::SchemaExtension;
pub use schema_loader::SchemaLoadError;
pub use schema_loader::SchemaLoader;
pub use schema_loader::WorkspaceSchemaLoader;
