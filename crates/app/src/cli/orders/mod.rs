use clap::{Args, Subcommand};

use floret_app::context::AppContext;

mod cancel;
mod list;
mod show;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    List,
    Show(show::ShowOrderArgs),
    Cancel(cancel::CancelOrderArgs),
}

pub(crate) async fn run(command: OrdersCommand, context: &AppContext) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::List => list::run(context).await,
        OrdersSubcommand::Show(args) => show::run(args, context).await,
        OrdersSubcommand::Cancel(args) => cancel::run(args, context).await,
    }
}
