use crate::schema::Field;
use crate::schema::OperationKind;
use crate::schema::Schema;
use thiserror::Error;

type Result<T> = std::result::Result<T, TemplateError>;

/// The field a fresh selection on `type_name` starts out with: `id` when the
/// type has one, else `__typename`. `None` for leaf (scalar/enum) types.
fn default_selection(schema: &Schema, type_name: &str) -> Option<&'static str> {
    let named_type = schema.get_type(type_name)?;
    if !named_type.kind().is_composite() {
        return None;
    }

    Some(if named_type.field("id").is_some() { "id" } else { "__typename" })
}

/// Builds `fragment <fragment_name> on <on_type> { ... }`.
pub fn make_fragment(
    schema: &Schema,
    fragment_name: &str,
    on_type: &str,
) -> Result<String> {
    let selection = default_selection(schema, on_type).unwrap_or("__typename");
    let document = format!(
        "fragment {fragment_name} on {on_type} {{\n  {selection}\n}}",
    );
    validate(document)
}

/// Builds an operation of the given kind that selects `field` from the root
/// type, declaring one variable per field argument.
pub fn make_operation(
    schema: &Schema,
    kind: OperationKind,
    operation_name: &str,
    field: &Field,
) -> Result<String> {
    let (variable_defs, arguments) =
        if field.arguments().is_empty() {
            (String::new(), String::new())
        } else {
            let defs = field.arguments().iter()
                .map(|arg| format!("${}: {}", arg.name(), arg.type_annotation()))
                .collect::<Vec<_>>()
                .join(", ");
            let args = field.arguments().iter()
                .map(|arg| format!("{0}: ${0}", arg.name()))
                .collect::<Vec<_>>()
                .join(", ");
            (format!("({defs})"), format!("({args})"))
        };

    let return_type_name = field.type_annotation().innermost_type_name();
    let sub_selection = match default_selection(schema, return_type_name) {
        Some(selection) => format!(" {{\n    {selection}\n  }}"),
        None => String::new(),
    };

    let document = format!(
        "{} {operation_name}{variable_defs} {{\n  {}{arguments}{sub_selection}\n}}",
        kind.keyword(),
        field.name(),
    );
    validate(document)
}

fn validate(document: String) -> Result<String> {
    if let Err(err) = graphql_parser::query::parse_query::<String>(document.as_str()) {
        return Err(TemplateError::InvalidDocument {
            document,
            err: err.to_string(),
        });
    }
    Ok(document)
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TemplateError {
    #[error("Generated an invalid GraphQL document ({err}):\n{document}")]
    InvalidDocument {
        document: String,
        err: String,
    },
}
