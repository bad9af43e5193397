use clap::Args;

use floret::order::OrderId;
use floret_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct CancelOrderArgs {
    /// Order id to cancel
    #[arg(long)]
    order: String,
}

pub(crate) async fn run(args: CancelOrderArgs, context: &AppContext) -> Result<(), String> {
    let order = context
        .orders
        .cancel(OrderId::new(args.order))
        .await
        .map_err(|error| format!("failed to cancel order: {error}"))?;

    println!("cancelled order {}", order.id);
    println!("status: {}", order.status);

    Ok(())
}
