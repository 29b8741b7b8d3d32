use crate::host::InputBoxOptions;
use crate::host::QuickPickOptions;
use crate::host::TextEditor;

/// The prompts and window state a host runtime exposes to a command.
///
/// Dismissing a prompt yields `None`; that's a cancellation, not an error.
#[allow(async_fn_in_trait)]
pub trait EditorHost {
    type Editor: TextEditor;

    fn active_text_editor(&self) -> Option<Self::Editor>;

    async fn show_error_message(&self, message: &str);

    async fn show_input_box(&self, options: InputBoxOptions<'_>) -> Option<String>;

    async fn show_quick_pick(
        &self,
        items: Vec<String>,
        options: QuickPickOptions,
    ) -> Option<String>;
}
