use clap::{Parser, Subcommand};

use floret_app::context::AppContext;

use crate::config::AppConfig;

mod cart;
mod catalog;
mod checkout;
mod favorites;
mod orders;
mod render;
mod voucher;

#[derive(Debug, Parser)]
#[command(name = "floret-app", about = "Floret storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Catalog(catalog::CatalogCommand),
    Cart(cart::CartCommand),
    Favorites(favorites::FavoritesCommand),
    Voucher(voucher::VoucherCommand),
    Checkout(checkout::PlaceOrderArgs),
    Orders(orders::OrdersCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let context = AppContext::open(&self.config.data_dir, self.config.shop_api())
            .map_err(|error| format!("failed to open data directory: {error}"))?;

        match self.command {
            Commands::Catalog(command) => catalog::run(command, &context).await,
            Commands::Cart(command) => cart::run(command, &context).await,
            Commands::Favorites(command) => favorites::run(command, &context).await,
            Commands::Voucher(command) => voucher::run(command, &context).await,
            Commands::Checkout(args) => checkout::run(args, &context).await,
            Commands::Orders(command) => orders::run(command, &context).await,
        }
    }
}
