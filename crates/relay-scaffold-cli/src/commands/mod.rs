mod candidates;
mod insert;

use crate::Cli;
use crate::CommandResult;
use candidates::CandidatesCmd;
use insert::InsertCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "relay-scaffold")]
pub(crate) enum CommandEnum {
    /// List the names offered when scaffolding the given kind.
    Candidates(Box<CandidatesCmd>),

    /// Insert a fragment/operation module into a source file.
    Insert(Box<InsertCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Candidates(cmd) => cmd.run(cli).await,
            Self::Insert(cmd) => cmd.run(cli).await,
        }
    }
}
