use floret_app::context::AppContext;

pub(crate) async fn run(context: &AppContext) -> Result<(), String> {
    let vouchers = context
        .vouchers
        .wallet()
        .await
        .map_err(|error| format!("failed to fetch saved vouchers: {error}"))?;

    if vouchers.is_empty() {
        println!("no saved vouchers");
        return Ok(());
    }

    super::print_vouchers(&vouchers);

    Ok(())
}
