use floret_app::context::AppContext;

pub(crate) fn run(context: &AppContext) -> Result<(), String> {
    let mut cart = context
        .cart()
        .map_err(|error| format!("failed to load the cart: {error}"))?;

    cart.clear()
        .map_err(|error| format!("failed to clear the cart: {error}"))?;

    println!("cart cleared");

    Ok(())
}
