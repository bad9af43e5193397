use clap::Args;

use floret::product::ProductId;
use floret_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct ToggleFavoriteArgs {
    /// Product id to favorite or unfavorite
    #[arg(long)]
    product: u64,
}

pub(crate) fn run(args: ToggleFavoriteArgs, context: &AppContext) -> Result<(), String> {
    let mut favorites = context
        .favorites()
        .map_err(|error| format!("failed to load favorites: {error}"))?;

    let favorited = favorites
        .toggle(ProductId::new(args.product))
        .map_err(|error| format!("failed to update favorites: {error}"))?;

    if favorited {
        println!("product {} is now a favorite", args.product);
    } else {
        println!("product {} is no longer a favorite", args.product);
    }

    Ok(())
}
