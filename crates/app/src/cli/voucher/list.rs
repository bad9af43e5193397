use floret_app::context::AppContext;

pub(crate) async fn run(context: &AppContext) -> Result<(), String> {
    let vouchers = context
        .vouchers
        .list()
        .await
        .map_err(|error| format!("failed to list vouchers: {error}"))?;

    if vouchers.is_empty() {
        println!("no vouchers available");
        return Ok(());
    }

    super::print_vouchers(&vouchers);

    Ok(())
}
