use crate::cli::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Tree(args) => commands::tree::handle(&args, ctx).await,
        Commands::Show(args) => commands::show::handle(&args, ctx).await,
        Commands::Comments(args) => commands::comments::handle(&args, ctx).await,
        Commands::Cache { action } => commands::cache::handle(&action, ctx).await,
    }
}
