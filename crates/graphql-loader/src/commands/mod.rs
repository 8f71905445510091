mod bundle;

use crate::Cli;
use crate::CommandResult;
use bundle::BundleCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-loader")]
pub(crate) enum CommandEnum {
    /// Bundle a GraphQL document (or every document under a directory)
    /// together with all of its `#import`ed fragments.
    Bundle(Box<BundleCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Bundle(cmd) => cmd.run(cli).await
        }
    }
}

#[cfg(test)]
mod tests;
