use crate::host::HostError;
use crate::host::Position;

type Result<T> = std::result::Result<T, HostError>;

/// A handle on the document open in the active editor.
#[allow(async_fn_in_trait)]
pub trait TextEditor {
    /// The document's file name, as reported by the host (any path
    /// separator).
    fn file_name(&self) -> String;

    fn text(&self) -> String;

    /// The active end of the current selection.
    fn caret(&self) -> Position;

    /// Inserts `text` at the caret. Afterwards the caret sits just past the
    /// inserted text.
    async fn insert_at_caret(&mut self, text: &str) -> Result<()>;

    /// Collapses the selection to `position`.
    fn set_caret(&mut self, position: Position);

    async fn save(&mut self) -> Result<()>;
}
