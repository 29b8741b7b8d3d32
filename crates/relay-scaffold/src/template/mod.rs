mod component_boilerplate;
mod document_template;
pub mod naming;
mod relay_module;

pub use component_boilerplate::QueryComponentShape;
pub use component_boilerplate::fragment_component;
pub use component_boilerplate::mutation_component;
pub use component_boilerplate::query_component;
pub use component_boilerplate::subscription_component;
pub use document_template::TemplateError;
pub use document_template::make_fragment;
pub use document_template::make_operation;
pub use relay_module::fragment_module;
pub use relay_module::operation_module;

#[cfg(test)]
mod tests;
