use clap::Args;
use jiff::Timestamp;

use floret_app::context::AppContext;

use crate::cli::render;

#[derive(Debug, Args)]
pub(crate) struct ApplyVoucherArgs {
    /// Voucher code to apply
    #[arg(long)]
    code: String,
}

pub(crate) async fn run(args: ApplyVoucherArgs, context: &AppContext) -> Result<(), String> {
    let cart = context
        .cart()
        .map_err(|error| format!("failed to load the cart: {error}"))?;

    let applied = context
        .vouchers
        .apply(&args.code, cart.subtotal(), Timestamp::now())
        .await
        .map_err(|error| format!("failed to apply voucher: {error}"))?;

    println!("applied {} to the {} slot", applied.code, applied.target);
    println!("discount: {}", render::vnd(applied.amount));

    Ok(())
}
