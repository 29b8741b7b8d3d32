mod builtins;
mod field;
mod graphql_type_kind;
mod named_type;
mod operation_kind;
#[allow(clippy::module_inception)]
mod schema;
pub(crate) mod schema_builder;
mod type_annotation;

pub use field::Argument;
pub use field::Field;
pub use graphql_type_kind::GraphQLTypeKind;
pub use named_type::NamedType;
pub use operation_kind::OperationKind;
pub use schema::Schema;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use type_annotation::TypeAnnotation;

#[cfg(test)]
mod tests;
