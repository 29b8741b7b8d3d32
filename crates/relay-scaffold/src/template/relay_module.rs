fn indent(document: &str) -> String {
    document.lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("  {line}") })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `module <M> = %relay(` wrapping a fragment definition.
pub fn fragment_module(module_name: &str, document: &str) -> String {
    format!("module {module_name} = %relay(`\n{}\n`\n)", indent(document))
}

/// `module <M> = %relay(` wrapping a query, mutation or subscription.
pub fn operation_module(module_name: &str, document: &str) -> String {
    format!("module {module_name} = %relay(`\n{}\n`)", indent(document))
}
