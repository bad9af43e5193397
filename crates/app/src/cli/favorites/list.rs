use floret_app::context::AppContext;
use tabled::builder::Builder;

use crate::cli::render;

pub(crate) async fn run(context: &AppContext) -> Result<(), String> {
    let favorites = context
        .favorites()
        .map_err(|error| format!("failed to load favorites: {error}"))?;

    if favorites.is_empty() {
        println!("no favorites yet");
        return Ok(());
    }

    let products = context
        .catalog
        .list()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    let mut builder = Builder::default();

    builder.push_record(["Id", "Name", "Price"]);

    for id in favorites.all() {
        // Favorites outlive the catalog entry they point at.
        let row = match products.iter().find(|product| product.id == id) {
            Some(product) => [
                id.to_string(),
                product.name.clone(),
                render::vnd(product.effective_price()),
            ],
            None => [
                id.to_string(),
                "(no longer listed)".to_string(),
                String::new(),
            ],
        };

        builder.push_record(row);
    }

    render::print_table(builder, 2);

    Ok(())
}
