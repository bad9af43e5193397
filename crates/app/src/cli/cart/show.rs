use floret_app::context::AppContext;
use tabled::builder::Builder;

use crate::cli::render;

pub(crate) fn run(context: &AppContext) -> Result<(), String> {
    let cart = context
        .cart()
        .map_err(|error| format!("failed to load the cart: {error}"))?;

    if cart.is_empty() {
        println!("the cart is empty");
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Qty", "Unit Price", "Line Total"]);

    for line in cart.lines() {
        builder.push_record([
            line.product_id.to_string(),
            line.name.clone(),
            line.quantity.to_string(),
            render::vnd(line.effective_price()),
            render::vnd(line.line_total()),
        ]);
    }

    render::print_table(builder, 2);

    println!("items: {}", cart.item_count());
    println!("subtotal: {}", render::vnd(cart.subtotal()));

    Ok(())
}
