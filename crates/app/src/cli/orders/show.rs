use clap::Args;
use tabled::builder::Builder;

use floret::order::OrderId;
use floret_app::context::AppContext;

use crate::cli::render;

#[derive(Debug, Args)]
pub(crate) struct ShowOrderArgs {
    /// Order id
    #[arg(long)]
    order: String,
}

pub(crate) async fn run(args: ShowOrderArgs, context: &AppContext) -> Result<(), String> {
    let order = context
        .orders
        .get(OrderId::new(args.order))
        .await
        .map_err(|error| format!("failed to fetch order: {error}"))?;

    println!("order_id: {}", order.id);
    println!("status: {}", order.status);
    println!("payment: {}", order.payment_method);

    if let Some(created_at) = order.created_at {
        println!("created_at: {created_at}");
    }

    println!("discount: {}", render::vnd(order.discount));
    println!("shipping_fee: {}", render::vnd(order.shipping_fee));
    println!("total: {}", render::vnd(order.total));

    if !order.items.is_empty() {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Unit Price"]);

        for item in &order.items {
            builder.push_record([
                item.name.clone(),
                item.quantity.to_string(),
                render::vnd(item.price),
            ]);
        }

        render::print_table(builder, 1);
    }

    if order.is_cancellable() {
        println!("this order can still be cancelled");
    }

    Ok(())
}
