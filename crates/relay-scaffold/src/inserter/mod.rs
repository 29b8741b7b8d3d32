mod component_inserter;
mod component_kind;
mod insert_error;
mod insert_outcome;
mod module_name_prompt;

pub use component_inserter::insert_graphql_component;
pub use component_kind::ComponentKind;
pub use component_kind::ParseComponentKindError;
pub use insert_error::InsertError;
pub use insert_outcome::AbortReason;
pub use insert_outcome::InsertOutcome;
pub use module_name_prompt::validate_module_name;
