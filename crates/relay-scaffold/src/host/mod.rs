//! The narrow slice of an editor the scaffolding workflow needs: prompts,
//! the active document, caret placement and saving.

mod editor_host;
mod host_error;
mod position;
mod prompt_options;
mod text_editor;

pub use editor_host::EditorHost;
pub use host_error::HostError;
pub use position::Position;
pub use prompt_options::InputBoxOptions;
pub use prompt_options::QuickPickOptions;
pub use text_editor::TextEditor;
