use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use std::path::PathBuf;

/// A hook that contributes additional SDL to every schema loaded through a
/// [`GraphQLConfig`](crate::config::GraphQLConfig).
pub trait SchemaExtension: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    fn extend_schema(
        &self,
        builder: SchemaBuilder,
    ) -> Result<SchemaBuilder, SchemaBuildError>;
}

const RELAY_DIRECTIVE_DEFS: [(&str, &str); 16] = [
    ("relay", "directive @relay(mask: Boolean, plural: Boolean) on FRAGMENT_DEFINITION | FRAGMENT_SPREAD"),
    ("connection", "directive @connection(key: String!, filters: [String], handler: String, dynamicKey_UNSTABLE: String) on FIELD"),
    ("refetchable", "directive @refetchable(queryName: String!) on FRAGMENT_DEFINITION"),
    ("argumentDefinitions", "directive @argumentDefinitions on FRAGMENT_DEFINITION"),
    ("arguments", "directive @arguments on FRAGMENT_SPREAD"),
    ("inline", "directive @inline on FRAGMENT_DEFINITION"),
    ("preloadable", "directive @preloadable on QUERY"),
    ("raw_response_type", "directive @raw_response_type on QUERY | MUTATION | SUBSCRIPTION"),
    ("relay_test_operation", "directive @relay_test_operation on QUERY | MUTATION | SUBSCRIPTION"),
    ("appendEdge", "directive @appendEdge(connections: [ID!]!) on FIELD"),
    ("prependEdge", "directive @prependEdge(connections: [ID!]!) on FIELD"),
    ("appendNode", "directive @appendNode(connections: [ID!]!, edgeTypeName: String!) on FIELD"),
    ("prependNode", "directive @prependNode(connections: [ID!]!, edgeTypeName: String!) on FIELD"),
    ("deleteRecord", "directive @deleteRecord on FIELD"),
    ("deleteEdge", "directive @deleteEdge(connections: [ID!]!) on FIELD"),
    ("required", "directive @required(action: RequiredFieldAction!) on FIELD"),
];

const REQUIRED_FIELD_ACTION_DEF: &str = "enum RequiredFieldAction { NONE LOG THROW }";

/// Teaches loaded schemas about the client-only directives understood by the
/// Relay compiler, so they aren't mistaken for unknown directives.
#[derive(Debug, Default)]
pub struct RelayDirectivesExtension;
impl SchemaExtension for RelayDirectivesExtension {
    fn name(&self) -> &str {
        "relay-directives"
    }

    fn extend_schema(
        &self,
        builder: SchemaBuilder,
    ) -> Result<SchemaBuilder, SchemaBuildError> {
        let mut sdl: Vec<&str> = RELAY_DIRECTIVE_DEFS.iter()
            .filter(|(name, _)| !builder.defines_directive(name))
            .map(|(_, def)| *def)
            .collect();

        if !builder.defines_type("RequiredFieldAction") {
            sdl.push(REQUIRED_FIELD_ACTION_DEF);
        }

        if sdl.is_empty() {
            return Ok(builder);
        }

        log::trace!("Adding {} Relay definitions to the schema.", sdl.len());
        builder.load_str(
            Some(PathBuf::from("relay://directives")),
            sdl.join("\n").as_str(),
        )
    }
}
