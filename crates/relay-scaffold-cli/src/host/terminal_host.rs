use crate::host::FileEditor;
use crate::host::PickResolution;
use crate::output_utils;
use relay_scaffold::host::EditorHost;
use relay_scaffold::host::InputBoxOptions;
use relay_scaffold::host::QuickPickOptions;
use tokio::io::AsyncBufRead;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tokio::io::Lines;
use tokio::io::Stdin;
use tokio::sync::Mutex;

/// An [`EditorHost`] that prompts on stderr and reads answers line by line.
///
/// End of input dismisses whatever prompt is open.
#[derive(Debug)]
pub(crate) struct TerminalHost<R> {
    editor: Option<FileEditor>,
    input: Mutex<Lines<R>>,
}
impl TerminalHost<BufReader<Stdin>> {
    pub(crate) fn stdin(editor: Option<FileEditor>) -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), editor)
    }
}
impl<R: AsyncBufRead + Unpin> TerminalHost<R> {
    pub(crate) fn new(input: R, editor: Option<FileEditor>) -> Self {
        Self {
            editor,
            input: Mutex::new(input.lines()),
        }
    }

    async fn read_line(&self) -> Option<String> {
        match self.input.lock().await.next_line().await {
            Ok(line) => line,
            Err(e) => {
                log::warn!("Failed to read from the terminal: {e}");
                None
            },
        }
    }
}
impl<R: AsyncBufRead + Unpin> EditorHost for TerminalHost<R> {
    type Editor = FileEditor;

    fn active_text_editor(&self) -> Option<FileEditor> {
        self.editor.clone()
    }

    async fn show_error_message(&self, message: &str) {
        eprintln!("{} {message}", output_utils::RED_X);
    }

    async fn show_input_box(&self, options: InputBoxOptions<'_>) -> Option<String> {
        eprintln!("{}", options.prompt);
        loop {
            eprint!("[{}] > ", options.value);
            let line = self.read_line().await?;
            let value = match line.trim() {
                "" => options.value.to_owned(),
                value => value.to_string(),
            };
            match options.validate(value.as_str()) {
                Some(message) => eprintln!("{} {message}", output_utils::RED_X),
                None => return Some(value),
            }
        }
    }

    async fn show_quick_pick(
        &self,
        items: Vec<String>,
        options: QuickPickOptions,
    ) -> Option<String> {
        if items.is_empty() {
            log::info!("There is nothing to pick from.");
            return None;
        }

        if let Some(place_holder) = &options.place_holder {
            eprintln!("{place_holder}");
        }
        for (idx, item) in items.iter().enumerate() {
            eprintln!("  {}) {item}", idx + 1);
        }

        loop {
            eprint!("> ");
            let line = self.read_line().await?;
            match PickResolution::resolve(&items, line.as_str()) {
                PickResolution::Ambiguous(matches) => eprintln!(
                    "`{}` matches {}; be more specific.",
                    line.trim(),
                    matches.join(", "),
                ),
                PickResolution::Cancelled => return None,
                PickResolution::NoMatch => eprintln!("Nothing matches `{}`.", line.trim()),
                PickResolution::Picked(item) => return Some(item.to_string()),
            }
        }
    }
}
