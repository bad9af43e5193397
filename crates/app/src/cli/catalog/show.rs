use clap::Args;

use floret::product::ProductId;
use floret_app::context::AppContext;

use crate::cli::render;

#[derive(Debug, Args)]
pub(crate) struct ShowProductArgs {
    /// Product id
    #[arg(long)]
    product: u64,
}

pub(crate) async fn run(args: ShowProductArgs, context: &AppContext) -> Result<(), String> {
    let product = context
        .catalog
        .get(ProductId::new(args.product))
        .await
        .map_err(|error| format!("failed to fetch product: {error}"))?;

    println!("id: {}", product.id);
    println!("name: {}", product.name);
    println!("price: {}", render::vnd(product.price));

    if let Some(sale_price) = product.sale_price {
        println!("sale_price: {}", render::vnd(sale_price));
    }

    if !product.thumbnail.is_empty() {
        println!("thumbnail: {}", product.thumbnail);
    }

    Ok(())
}
