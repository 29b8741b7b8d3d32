use clap::CommandFactory;
use crate::commands;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "relay-scaffold", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,

    #[arg(
        global=true,
        help="Workspace root to search for the `relay` config file. Defaults \
             to the current directory.",
        long,
        short='w',
    )]
    pub workspace: Option<PathBuf>,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }

    pub(crate) fn workspace_root(&self) -> anyhow::Result<PathBuf> {
        match &self.workspace {
            Some(path) => Ok(path.to_owned()),
            None => Ok(std::env::current_dir()?),
        }
    }
}
