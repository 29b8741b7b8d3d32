//! Schema-driven scaffolding for Relay: pick a type or root field from the
//! project's GraphQL schema and insert a fragment/operation module (plus an
//! optional component stub) at the caret of the active editor.
//!
//! The editor is reached only through the [`host::EditorHost`] and
//! [`host::TextEditor`] traits, and the schema only through
//! [`config::SchemaLoader`], so the whole workflow runs the same inside an
//! editor integration, a terminal, or a test.

pub mod config;
pub mod host;
pub mod inserter;
pub mod schema;
pub mod template;

pub use config::SchemaLoader;
pub use config::WorkspaceSchemaLoader;
pub use inserter::ComponentKind;
pub use inserter::InsertError;
pub use inserter::InsertOutcome;
pub use inserter::insert_graphql_component;
pub use schema::Schema;
