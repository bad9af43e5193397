use clap::Args;

use floret::product::ProductId;
use floret_app::context::AppContext;

use crate::cli::render;

#[derive(Debug, Args)]
pub(crate) struct AddLineArgs {
    /// Product id to add
    #[arg(long)]
    product: u64,

    /// Quantity to add
    #[arg(long, default_value_t = 1)]
    quantity: u32,
}

pub(crate) async fn run(args: AddLineArgs, context: &AppContext) -> Result<(), String> {
    let product = context
        .catalog
        .get(ProductId::new(args.product))
        .await
        .map_err(|error| format!("failed to fetch product: {error}"))?;

    let mut cart = context
        .cart()
        .map_err(|error| format!("failed to load the cart: {error}"))?;

    cart.add(&product, args.quantity)
        .map_err(|error| format!("failed to add to cart: {error}"))?;

    println!("added {} x {}", args.quantity, product.name);
    println!("subtotal: {}", render::vnd(cart.subtotal()));

    Ok(())
}
