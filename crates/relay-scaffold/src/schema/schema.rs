use crate::schema::NamedType;
use crate::schema::OperationKind;
use crate::schema::SchemaBuilder;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// A read-only view of a GraphQL type system: named types, root operation
/// types and the directives it declares.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_names: IndexSet<String>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, NamedType>,
}
impl Schema {
    /// Returns every named type in the schema (including the built-in scalars
    /// and the `__`-prefixed introspection types) in definition order.
    pub fn all_types(&self) -> &IndexMap<String, NamedType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn has_directive(&self, name: &str) -> bool {
        self.directive_names.contains(name)
    }

    pub fn directive_names(&self) -> impl Iterator<Item = &str> {
        self.directive_names.iter().map(String::as_str)
    }

    pub fn get_type(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name)
    }

    /// Returns this schema's Mutation root operation type, if one is defined.
    ///
    /// This honors a `schema { mutation: ... }` override, so prefer it over
    /// looking up a type named `"Mutation"`.
    pub fn mutation_type(&self) -> Option<&NamedType> {
        self.mutation_type.as_deref().and_then(|name| self.types.get(name))
    }

    /// Returns this schema's Query root operation type, if one is defined.
    pub fn query_type(&self) -> Option<&NamedType> {
        self.query_type.as_deref().and_then(|name| self.types.get(name))
    }

    /// Returns this schema's Subscription root operation type, if one is
    /// defined.
    pub fn subscription_type(&self) -> Option<&NamedType> {
        self.subscription_type.as_deref().and_then(|name| self.types.get(name))
    }

    /// Returns the root operation type backing operations of the given kind.
    pub fn root_operation_type(&self, kind: OperationKind) -> Option<&NamedType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => self.query_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }
}
