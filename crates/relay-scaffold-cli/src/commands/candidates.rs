use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use relay_scaffold::ComponentKind;
use relay_scaffold::SchemaLoader;
use relay_scaffold::WorkspaceSchemaLoader;

#[derive(Debug, clap::Args)]
pub(crate) struct CandidatesCmd {
    #[arg(
        help="`fragment`, `query`, `mutation` or `subscription`.",
        name="KIND",
    )]
    kind: ComponentKind,
}

#[inherent::inherent]
impl RunnableCommand for CandidatesCmd {
    pub async fn run(self, cli: Cli) -> CommandResult {
        let workspace_root = match cli.workspace_root() {
            Ok(workspace_root) => workspace_root,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Unable to determine the workspace root: {e}",
                output_utils::RED_X,
            )),
        };

        let schema_loader = WorkspaceSchemaLoader::new(workspace_root.as_path());
        match schema_loader.load_schema().await {
            Ok(Some(schema)) => {
                let items = self.kind.selectable_items(&schema);
                log::debug!("Found {} {} candidates.", items.len(), self.kind);
                CommandResult::stdout(format_args!("{}", items.join("\n")))
            },

            Ok(None) => CommandResult::stderr(format_args!(
                "{} No `relay` config with a schema was found in {workspace_root:?}.",
                output_utils::RED_X,
            )),

            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to load the schema: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
