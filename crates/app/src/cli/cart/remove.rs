use clap::Args;

use floret::product::ProductId;
use floret_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct RemoveLineArgs {
    /// Product id to remove
    #[arg(long)]
    product: u64,
}

pub(crate) fn run(args: RemoveLineArgs, context: &AppContext) -> Result<(), String> {
    let mut cart = context
        .cart()
        .map_err(|error| format!("failed to load the cart: {error}"))?;

    let removed = cart
        .remove(ProductId::new(args.product))
        .map_err(|error| format!("failed to update the cart: {error}"))?;

    if removed {
        println!("removed product {} from the cart", args.product);
    } else {
        println!("product {} is not in the cart", args.product);
    }

    Ok(())
}
