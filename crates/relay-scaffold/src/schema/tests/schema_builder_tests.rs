use crate::schema::GraphQLTypeKind;
use crate::schema::OperationKind;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn default_root_operation_types() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { me: User }\n",
            "type Mutation { noop: Boolean }\n",
            "type User { id: ID! }\n",
        ))?
        .build()?;

    assert_eq!(schema.query_type().map(|t| t.name()), Some("Query"));
    assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));
    assert!(schema.subscription_type().is_none());
    assert_eq!(
        schema.root_operation_type(OperationKind::Mutation).map(|t| t.name()),
        Some("Mutation"),
    );

    Ok(())
}

#[test]
fn schema_block_overrides_root_type_names() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "schema { query: RootQuery subscription: RootSubscription }\n",
            "type RootQuery { viewer: String }\n",
            "type RootSubscription { ticks: Int }\n",
            "type Query { unused: String }\n",
        ))?
        .build()?;

    assert_eq!(schema.query_type().map(|t| t.name()), Some("RootQuery"));
    assert_eq!(
        schema.subscription_type().map(|t| t.name()),
        Some("RootSubscription"),
    );
    assert!(schema.mutation_type().is_none());

    Ok(())
}

#[test]
fn schema_block_naming_undefined_type_is_an_error() {
    let result = SchemaBuilder::new()
        .load_str(None, "schema { query: Missing }\ntype Query { a: Int }")
        .and_then(|builder| builder.build());

    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidRootOperationType {
            operation: OperationKind::Query,
            ..
        }),
    ));
}

#[test]
fn builtin_and_introspection_types_are_injected() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { a: Int }")?
        .build()?;

    for scalar_name in ["Boolean", "Float", "ID", "Int", "String"] {
        assert_eq!(
            schema.get_type(scalar_name).map(|t| t.kind()),
            Some(GraphQLTypeKind::Scalar),
        );
    }
    assert_eq!(
        schema.get_type("__Type").map(|t| t.kind()),
        Some(GraphQLTypeKind::Object),
    );
    assert_eq!(
        schema.get_type("__TypeKind").map(|t| t.kind()),
        Some(GraphQLTypeKind::Enum),
    );
    assert!(schema.get_type("__Schema").is_some_and(|t| t.is_introspection_type()));
    assert!(schema.has_directive("deprecated"));

    Ok(())
}

#[test]
fn type_kinds_are_recorded() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query { node: Node }\n",
            "interface Node { id: ID! }\n",
            "union SearchResult = Query\n",
            "enum Color { RED GREEN }\n",
            "input UserInput { name: String }\n",
            "scalar DateTime\n",
        ))?
        .build()?;

    let kind_of = |name: &str| schema.get_type(name).map(|t| t.kind());
    assert_eq!(kind_of("Node"), Some(GraphQLTypeKind::Interface));
    assert_eq!(kind_of("SearchResult"), Some(GraphQLTypeKind::Union));
    assert_eq!(kind_of("Color"), Some(GraphQLTypeKind::Enum));
    assert_eq!(kind_of("UserInput"), Some(GraphQLTypeKind::InputObject));
    assert_eq!(kind_of("DateTime"), Some(GraphQLTypeKind::Scalar));

    Ok(())
}

#[test]
fn type_map_preserves_definition_order() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Zebra { a: Int }\ntype Query { z: Zebra }\ntype Apple { b: Int }")?
        .build()?;

    let names: Vec<&str> = schema.all_types().keys()
        .map(String::as_str)
        .take(3)
        .collect();
    assert_eq!(names, vec!["Zebra", "Query", "Apple"]);

    Ok(())
}

#[test]
fn fields_and_arguments_are_recorded() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, concat!(
            "type Query {\n",
            "  users(first: Int = 10, after: String, filter: [ID!]!): [User!]!\n",
            "}\n",
            "type User { id: ID! }\n",
        ))?
        .build()?;

    let users = schema.query_type()
        .and_then(|query| query.field("users"))
        .expect("users field is defined");
    assert_eq!(users.type_annotation().to_graphql_string(), "[User!]!");
    assert_eq!(users.type_annotation().innermost_type_name(), "User");

    let args: Vec<(&str, String, bool)> = users.arguments().iter()
        .map(|arg| (
            arg.name(),
            arg.type_annotation().to_graphql_string(),
            arg.has_default_value(),
        ))
        .collect();
    assert_eq!(args, vec![
        ("first", "Int".to_string(), true),
        ("after", "String".to_string(), false),
        ("filter", "[ID!]!".to_string(), false),
    ]);

    Ok(())
}

#[test]
fn object_extensions_merge_fields_across_sources() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "extend type Query { extra: String }")?
        .load_str(None, "type Query { base: Int }")?
        .build()?;

    let query_fields: Vec<&str> = schema.query_type()
        .map(|query| query.fields().keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(query_fields, vec!["base", "extra"]);

    Ok(())
}

#[test]
fn extension_of_undefined_type_is_an_error() {
    let result = SchemaBuilder::new()
        .load_str(None, "type Query { a: Int }\nextend type Ghost { b: Int }")
        .and_then(|builder| builder.build());

    assert!(matches!(
        result,
        Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
            if type_name == "Ghost",
    ));
}

#[test]
fn duplicate_type_definitions_are_an_error() {
    let result = SchemaBuilder::new()
        .load_str(Some(PathBuf::from("a.graphql")), "type User { id: ID }")
        .and_then(|builder| builder.load_str(
            Some(PathBuf::from("b.graphql")),
            "type User { name: String }",
        ));

    assert_eq!(result.err(), Some(SchemaBuildError::DuplicateTypeDefinition {
        file1: PathBuf::from("a.graphql"),
        file2: PathBuf::from("b.graphql"),
        type_name: "User".to_string(),
    }));
}

#[test]
fn parse_errors_name_the_offending_source() {
    let result = SchemaBuilder::new()
        .load_str(None, "type Query {")
        .map(|_| ());

    assert!(matches!(
        result,
        Err(SchemaBuildError::ParseError { file, .. })
            if file == PathBuf::from("str://0"),
    ));
}

#[test]
fn directive_definitions_are_recorded() -> Result<()> {
    let schema = SchemaBuilder::new()
        .load_str(None, "directive @live on QUERY\ntype Query { a: Int }")?
        .build()?;

    assert!(schema.has_directive("live"));
    assert!(!schema.has_directive("connection"));

    Ok(())
}

#[test]
fn load_files_reads_each_file_in_order() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let types_path = dir.path().join("types.graphql");
    let ext_path = dir.path().join("extensions.graphql");
    std::fs::write(types_path.as_path(), "type Query { a: Int }").unwrap();
    std::fs::write(ext_path.as_path(), "extend type Query { b: String }").unwrap();

    let schema = SchemaBuilder::new()
        .load_files(vec![types_path, ext_path])?
        .build()?;

    let query_type = schema.query_type().unwrap();
    assert_eq!(query_type.fields().keys().collect::<Vec<_>>(), vec!["a", "b"]);

    Ok(())
}

#[test]
fn missing_files_are_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing_path = dir.path().join("missing.graphql");

    let result = SchemaBuilder::new().load_file(missing_path.as_path()).map(|_| ());

    assert!(matches!(
        result,
        Err(SchemaBuildError::SchemaFileReadError { file, .. }) if file == missing_path,
    ));
}
