use floret_app::context::AppContext;
use tabled::builder::Builder;

use crate::cli::render;

pub(crate) async fn run(context: &AppContext) -> Result<(), String> {
    let orders = context
        .orders
        .list()
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.is_empty() {
        println!("no orders yet");
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Id", "Status", "Payment", "Total", "Created"]);

    for order in orders {
        builder.push_record([
            order.id.to_string(),
            order.status.to_string(),
            order.payment_method.to_string(),
            render::vnd(order.total),
            order
                .created_at
                .map_or_else(String::new, |value| value.to_string()),
        ]);
    }

    render::print_table(builder, 3);

    Ok(())
}
