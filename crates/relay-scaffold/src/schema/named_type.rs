use crate::schema::Field;
use crate::schema::GraphQLTypeKind;
use indexmap::IndexMap;

/// A named type (object, interface, union, enum, scalar or input object)
/// defined in a [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) kind: GraphQLTypeKind,
    pub(crate) name: String,
}
impl NamedType {
    pub(crate) fn new(name: impl Into<String>, kind: GraphQLTypeKind) -> Self {
        Self {
            fields: IndexMap::new(),
            kind,
            name: name.into(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Fields in definition order. Always empty for scalars, enums, unions and
    /// input objects.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn is_introspection_type(&self) -> bool {
        self.name.starts_with("__")
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
