use floret_app::context::AppContext;
use tabled::builder::Builder;

use crate::cli::render;

pub(crate) async fn run(context: &AppContext) -> Result<(), String> {
    let products = context
        .catalog
        .list()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products available");
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Price", "Sale Price"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name,
            render::vnd(product.price),
            product.sale_price.map_or_else(String::new, render::vnd),
        ]);
    }

    render::print_table(builder, 2);

    Ok(())
}
