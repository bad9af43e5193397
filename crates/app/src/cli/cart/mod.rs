use clap::{Args, Subcommand};

use floret_app::context::AppContext;

mod add;
mod clear;
mod remove;
mod set_quantity;
mod show;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    Show,
    Add(add::AddLineArgs),
    Remove(remove::RemoveLineArgs),
    SetQuantity(set_quantity::SetQuantityArgs),
    Clear,
}

pub(crate) async fn run(command: CartCommand, context: &AppContext) -> Result<(), String> {
    match command.command {
        CartSubcommand::Show => show::run(context),
        CartSubcommand::Add(args) => add::run(args, context).await,
        CartSubcommand::Remove(args) => remove::run(args, context),
        CartSubcommand::SetQuantity(args) => set_quantity::run(args, context),
        CartSubcommand::Clear => clear::run(context),
    }
}
