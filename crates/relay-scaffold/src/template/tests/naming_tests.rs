use crate::template::naming;

#[test]
fn file_module_name_is_path_separator_agnostic() {
    assert_eq!(naming::file_module_name("/src/components/UserList.res"), "UserList");
    assert_eq!(naming::file_module_name("C:\\src\\components\\userList.res"), "UserList");
    assert_eq!(naming::file_module_name("Profile.bs.js"), "Profile");
    assert_eq!(naming::file_module_name(""), "");
}

#[test]
fn capitalization_only_touches_the_first_char() {
    assert_eq!(naming::capitalize("updateUser"), "UpdateUser");
    assert_eq!(naming::uncapitalize("UserFragment"), "userFragment");
    assert_eq!(naming::capitalize(""), "");
}

#[test]
fn module_declaration_check_is_a_substring_match() {
    let doc_text = "module Foo = %relay(`...`)\n// module Baz = comment\n";

    assert!(naming::module_declaration_exists(doc_text, "Foo"));
    assert!(!naming::module_declaration_exists(doc_text, "Bar"));
    // Known limitation: commented-out declarations still count...
    assert!(naming::module_declaration_exists(doc_text, "Baz"));
    // ...and differently spaced ones don't.
    assert!(!naming::module_declaration_exists("module  Foo =", "Foo"));
}

#[test]
fn default_module_names() {
    assert_eq!(naming::default_fragment_module_name("User"), "UserFragment");
    assert_eq!(naming::default_mutation_module_name("updateUser"), "UpdateUserMutation");
    assert_eq!(naming::DEFAULT_QUERY_MODULE_NAME, "Query");
    assert_eq!(naming::DEFAULT_SUBSCRIPTION_MODULE_NAME, "Subscription");
}

#[test]
fn fragment_name_strips_the_fragment_suffix() {
    assert_eq!(naming::fragment_name("UserList", "UserFragment"), "UserList_user");
    assert_eq!(naming::fragment_name("UserList", "Avatar"), "UserList_avatar");
    assert_eq!(
        naming::fragment_name("UserList", "FragmentOfFragment"),
        "UserList_ofFragment",
    );
}

#[test]
fn query_operation_name_never_doubles_the_suffix() {
    assert_eq!(naming::query_operation_name("UserList", "Query"), "UserListQuery");
    assert_eq!(naming::query_operation_name("UserList", "ViewerQuery"), "UserListViewerQuery");
    assert_eq!(naming::query_operation_name("UserList", "Viewer"), "UserListViewerQuery");
}

#[test]
fn mutation_and_subscription_operation_names() {
    assert_eq!(
        naming::mutation_operation_name("UserList", "updateUser"),
        "UserList_UpdateUserMutation",
    );
    assert_eq!(
        naming::subscription_operation_name("Feed", "postAdded"),
        "Feed_PostAddedSubscription",
    );
}
