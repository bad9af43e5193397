use clap::Args;

use floret_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct SaveVoucherArgs {
    /// Voucher code to save for later
    #[arg(long)]
    code: String,
}

pub(crate) async fn run(args: SaveVoucherArgs, context: &AppContext) -> Result<(), String> {
    context
        .vouchers
        .save(&args.code)
        .await
        .map_err(|error| format!("failed to save voucher: {error}"))?;

    println!("saved {}", args.code);

    Ok(())
}
