//! Name derivation rules shared by every component kind.

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives the module name of a source file from its path: the base name
/// (after the last `/` or `\`), cut at its first `.`, capitalized.
pub fn file_module_name(file_name: &str) -> String {
    let base_name = file_name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or_default();
    let stem = base_name.split('.').next().unwrap_or_default();
    capitalize(stem)
}

/// Whether `doc_text` already declares `module <name> =`.
///
/// This is a plain substring search: a declaration inside a comment counts,
/// and one spelled with different whitespace doesn't.
pub fn module_declaration_exists(doc_text: &str, module_name: &str) -> bool {
    doc_text.contains(format!("module {module_name} =").as_str())
}

pub fn default_fragment_module_name(on_type: &str) -> String {
    format!("{on_type}Fragment")
}

pub fn default_mutation_module_name(field_name: &str) -> String {
    format!("{}Mutation", capitalize(field_name))
}

pub const DEFAULT_QUERY_MODULE_NAME: &str = "Query";

pub const DEFAULT_SUBSCRIPTION_MODULE_NAME: &str = "Subscription";

/// `<FileModule>_<moduleName minus its first "Fragment">`, with the module
/// part uncapitalized.
pub fn fragment_name(file_module_name: &str, module_name: &str) -> String {
    format!(
        "{file_module_name}_{}",
        uncapitalize(module_name.replacen("Fragment", "", 1).as_str()),
    )
}

/// `<FileModule><ModuleName>Query`, without doubling a `Query` suffix the
/// module name already carries.
pub fn query_operation_name(file_module_name: &str, module_name: &str) -> String {
    let suffix = if module_name.ends_with("Query") { "" } else { "Query" };
    format!("{file_module_name}{module_name}{suffix}")
}

pub fn mutation_operation_name(file_module_name: &str, field_name: &str) -> String {
    format!("{file_module_name}_{}Mutation", capitalize(field_name))
}

pub fn subscription_operation_name(file_module_name: &str, field_name: &str) -> String {
    format!("{file_module_name}_{}Subscription", capitalize(field_name))
}
