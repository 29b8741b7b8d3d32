use crate::host::EditorHost;
use crate::host::InputBoxOptions;
use crate::template::naming;

/// Rejects exactly the name that collided.
pub fn validate_module_name(colliding_name: &str, value: &str) -> Option<String> {
    (value == colliding_name).then(|| format!("Name cannot be '{colliding_name}'."))
}

/// Returns `name` unless the document already declares a module by that
/// name, in which case the user is asked for another one. Dismissing that
/// prompt (or submitting an empty name) keeps `name`.
pub(crate) async fn valid_module_name<H: EditorHost>(
    host: &H,
    doc_text: &str,
    name: &str,
) -> String {
    if !naming::module_declaration_exists(doc_text, name) {
        return name.to_string();
    }

    log::debug!("Module `{name}` already exists in the document; asking for another name.");
    let new_name = host.show_input_box(InputBoxOptions {
        prompt: format!("Enter module name ('{name}' already exists in document)"),
        validate_input: Box::new(move |value: &str| validate_module_name(name, value)),
        value: name.to_string(),
    }).await;

    match new_name {
        Some(new_name) if !new_name.is_empty() => new_name,
        _ => name.to_string(),
    }
}
