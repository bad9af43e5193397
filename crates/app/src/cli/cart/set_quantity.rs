use clap::Args;

use floret::product::ProductId;
use floret_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct SetQuantityArgs {
    /// Product id to change
    #[arg(long)]
    product: u64,

    /// New quantity; 0 removes the line
    #[arg(long)]
    quantity: u32,
}

pub(crate) fn run(args: SetQuantityArgs, context: &AppContext) -> Result<(), String> {
    let mut cart = context
        .cart()
        .map_err(|error| format!("failed to load the cart: {error}"))?;

    let present = cart
        .set_quantity(ProductId::new(args.product), args.quantity)
        .map_err(|error| format!("failed to update the cart: {error}"))?;

    if !present {
        println!("product {} is not in the cart", args.product);
        return Ok(());
    }

    if args.quantity == 0 {
        println!("removed product {} from the cart", args.product);
    } else {
        println!("product {} quantity set to {}", args.product, args.quantity);
    }

    Ok(())
}
