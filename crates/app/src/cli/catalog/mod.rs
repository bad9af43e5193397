use clap::{Args, Subcommand};

use floret_app::context::AppContext;

mod list;
mod show;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    List,
    Show(show::ShowProductArgs),
}

pub(crate) async fn run(command: CatalogCommand, context: &AppContext) -> Result<(), String> {
    match command.command {
        CatalogSubcommand::List => list::run(context).await,
        CatalogSubcommand::Show(args) => show::run(args, context).await,
    }
}
