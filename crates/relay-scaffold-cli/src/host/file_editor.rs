use relay_scaffold::host::HostError;
use relay_scaffold::host::Position;
use relay_scaffold::host::TextEditor;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, HostError>;

/// A source file held in memory, edited at a caret and written back on
/// [`save()`](TextEditor::save).
#[derive(Clone, Debug)]
pub(crate) struct FileEditor {
    caret: Position,
    path: PathBuf,
    text: String,
}
impl FileEditor {
    /// Reads `path`. Without an explicit `caret` the caret is placed at the
    /// end of the file.
    pub(crate) async fn open(path: PathBuf, caret: Option<Position>) -> Result<Self> {
        let text = tokio::fs::read_to_string(path.as_path()).await
            .map_err(|source| HostError::Io {
                path: path.to_owned(),
                source,
            })?;
        let caret = caret.unwrap_or_else(|| Position::default().after_insert(text.as_str()));

        Ok(Self { caret, path, text })
    }
}
impl TextEditor for FileEditor {
    fn file_name(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    fn text(&self) -> String {
        self.text.to_owned()
    }

    fn caret(&self) -> Position {
        self.caret
    }

    async fn insert_at_caret(&mut self, text: &str) -> Result<()> {
        let offset = self.caret.to_byte_offset(self.text.as_str());
        self.text.insert_str(offset, text);
        self.caret = self.caret.after_insert(text);
        Ok(())
    }

    fn set_caret(&mut self, position: Position) {
        self.caret = position;
    }

    async fn save(&mut self) -> Result<()> {
        tokio::fs::write(self.path.as_path(), self.text.as_bytes()).await
            .map_err(|source| HostError::Io {
                path: self.path.to_owned(),
                source,
            })?;
        log::trace!("Wrote {} bytes to {:#?}.", self.text.len(), self.path);
        Ok(())
    }
}
