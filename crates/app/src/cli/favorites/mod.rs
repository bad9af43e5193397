use clap::{Args, Subcommand};

use floret_app::context::AppContext;

mod list;
mod toggle;

#[derive(Debug, Args)]
pub(crate) struct FavoritesCommand {
    #[command(subcommand)]
    command: FavoritesSubcommand,
}

#[derive(Debug, Subcommand)]
enum FavoritesSubcommand {
    Toggle(toggle::ToggleFavoriteArgs),
    List,
}

pub(crate) async fn run(command: FavoritesCommand, context: &AppContext) -> Result<(), String> {
    match command.command {
        FavoritesSubcommand::Toggle(args) => toggle::run(args, context),
        FavoritesSubcommand::List => list::run(context).await,
    }
}
