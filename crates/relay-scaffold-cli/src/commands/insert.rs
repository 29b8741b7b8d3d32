use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::host::FileEditor;
use crate::host::TerminalHost;
use crate::output_utils;
use relay_scaffold::ComponentKind;
use relay_scaffold::InsertOutcome;
use relay_scaffold::WorkspaceSchemaLoader;
use relay_scaffold::host::Position;
use relay_scaffold::host::TextEditor;
use relay_scaffold::insert_graphql_component;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct InsertCmd {
    #[arg(
        help="What to scaffold: `fragment`, `query`, `mutation` or \
             `subscription`.",
        name="KIND",
    )]
    kind: ComponentKind,

    #[arg(
        help="The source file to insert into.",
        long,
        short='f',
    )]
    file: PathBuf,

    #[arg(
        help="1-based line of the caret. Defaults to the end of the file.",
        long,
        short='l',
    )]
    line: Option<usize>,

    #[arg(
        help="1-based column of the caret. Defaults to the start of --line.",
        long,
        requires="line",
        short='c',
    )]
    column: Option<usize>,
}
impl InsertCmd {
    fn caret(&self) -> Option<Position> {
        let line = self.line?;
        let column = self.column.unwrap_or(1);
        Some(Position::new(line.saturating_sub(1), column.saturating_sub(1)))
    }
}

#[inherent::inherent]
impl RunnableCommand for InsertCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let workspace_root = match cli.workspace_root() {
            Ok(workspace_root) => workspace_root,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Unable to determine the workspace root: {e}",
                output_utils::RED_X,
            )),
        };

        let editor = match FileEditor::open(self.file.to_owned(), self.caret()).await {
            Ok(editor) => editor,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };
        log::debug!(
            "Inserting a {} module into {:#?} at {}.",
            self.kind,
            self.file,
            editor.caret(),
        );

        let host = TerminalHost::stdin(Some(editor));
        let schema_loader = WorkspaceSchemaLoader::new(workspace_root);
        match insert_graphql_component(&host, &schema_loader, self.kind).await {
            Ok(InsertOutcome::Inserted { caret, module_name, .. }) =>
                CommandResult::stdout(format_args!(
                    "{} Inserted `{module_name}` into {:?} (caret at {caret}).",
                    output_utils::GREEN_CHECK,
                    self.file,
                )),

            Ok(InsertOutcome::Aborted(reason)) => {
                log::info!("Nothing was inserted ({reason:?}).");
                CommandResult::empty()
            },

            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to insert a {} module: {e}",
                output_utils::RED_X,
                self.kind,
            )),
        }
    }
}
