use crate::schema::TypeAnnotation;
use graphql_parser::schema::Field as AstField;
use graphql_parser::schema::InputValue as AstInputValue;

/// A field defined on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) arguments: Vec<Argument>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub(crate) fn from_ast(ast_field: &AstField<'_, String>) -> Self {
        Self {
            arguments: ast_field.arguments.iter()
                .map(Argument::from_ast)
                .collect(),
            name: ast_field.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&ast_field.field_type),
        }
    }

    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}

/// An argument accepted by a [`Field`].
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub(crate) has_default_value: bool,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Argument {
    fn from_ast(input_value: &AstInputValue<'_, String>) -> Self {
        Self {
            has_default_value: input_value.default_value.is_some(),
            name: input_value.name.to_owned(),
            type_annotation: TypeAnnotation::from_ast_type(&input_value.value_type),
        }
    }

    pub fn has_default_value(&self) -> bool {
        self.has_default_value
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
