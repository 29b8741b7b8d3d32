use crate::schema::Field;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::template::make_fragment;
use crate::template::make_operation;

fn setup_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(None, r#"
            type Query {
              viewer: User
              users(first: Int = 10, after: String): [User!]!
              search(term: String!): [SearchResult!]!
              count: Int!
            }

            type Mutation {
              updateUser(id: ID!, name: String!): User
            }

            type Subscription {
              tick: Int
            }

            interface Node { id: ID! }

            type User implements Node { id: ID! name: String! }

            type Post { title: String! }

            union SearchResult = User | Post
        "#)
        .unwrap()
        .build()
        .unwrap()
}

fn root_field(schema: &Schema, kind: OperationKind, name: &str) -> Field {
    schema.root_operation_type(kind)
        .and_then(|root| root.field(name))
        .cloned()
        .unwrap()
}

#[test]
fn fragment_selects_id_when_available() {
    let schema = setup_schema();

    assert_eq!(
        make_fragment(&schema, "UserList_user", "User").unwrap(),
        "fragment UserList_user on User {\n  id\n}",
    );
    assert_eq!(
        make_fragment(&schema, "Page_post", "Post").unwrap(),
        "fragment Page_post on Post {\n  __typename\n}",
    );
    assert_eq!(
        make_fragment(&schema, "Page_result", "SearchResult").unwrap(),
        "fragment Page_result on SearchResult {\n  __typename\n}",
    );
}

#[test]
fn operation_without_arguments() {
    let schema = setup_schema();
    let field = root_field(&schema, OperationKind::Query, "viewer");

    assert_eq!(
        make_operation(&schema, OperationKind::Query, "AppQuery", &field).unwrap(),
        "query AppQuery {\n  viewer {\n    id\n  }\n}",
    );
}

#[test]
fn operation_declares_a_variable_per_argument() {
    let schema = setup_schema();
    let field = root_field(&schema, OperationKind::Mutation, "updateUser");

    assert_eq!(
        make_operation(
            &schema,
            OperationKind::Mutation,
            "UserList_UpdateUserMutation",
            &field,
        ).unwrap(),
        concat!(
            "mutation UserList_UpdateUserMutation($id: ID!, $name: String!) {\n",
            "  updateUser(id: $id, name: $name) {\n",
            "    id\n",
            "  }\n",
            "}",
        ),
    );
}

#[test]
fn list_and_union_return_types_get_a_selection() {
    let schema = setup_schema();

    let users = root_field(&schema, OperationKind::Query, "users");
    let users_doc = make_operation(&schema, OperationKind::Query, "UsersQuery", &users).unwrap();
    assert!(users_doc.starts_with("query UsersQuery($first: Int, $after: String) {"));
    assert!(users_doc.contains("users(first: $first, after: $after) {\n    id\n  }"));

    let search = root_field(&schema, OperationKind::Query, "search");
    let search_doc = make_operation(&schema, OperationKind::Query, "SearchQuery", &search).unwrap();
    assert!(search_doc.contains("search(term: $term) {\n    __typename\n  }"));
}

#[test]
fn scalar_return_types_have_no_selection() {
    let schema = setup_schema();

    let count = root_field(&schema, OperationKind::Query, "count");
    assert_eq!(
        make_operation(&schema, OperationKind::Query, "CountQuery", &count).unwrap(),
        "query CountQuery {\n  count\n}",
    );

    let tick = root_field(&schema, OperationKind::Subscription, "tick");
    assert_eq!(
        make_operation(&schema, OperationKind::Subscription, "Clock_TickSubscription", &tick).unwrap(),
        "subscription Clock_TickSubscription {\n  tick\n}",
    );
}

#[test]
fn unparseable_output_is_reported() {
    let schema = setup_schema();

    let result = make_fragment(&schema, "not a name", "User");

    assert!(result.is_err());
}
