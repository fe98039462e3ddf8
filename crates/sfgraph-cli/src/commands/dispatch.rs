use crate::cli::{Commands, GlobalFlags};
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding stage handler.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Scrape => commands::scrape::handle(ctx, flags).await,
        Commands::Transform => commands::transform::handle(ctx, flags),
        Commands::Publish => commands::publish::handle(ctx, flags).await,
        Commands::CreateSpace => commands::create_space::handle(ctx, flags).await,
        Commands::Submit => commands::submit::handle(ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
