use clap::{Args, ValueEnum};

use floret::voucher::VoucherTarget;
use floret_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct RemoveVoucherArgs {
    /// Which slot to clear
    #[arg(long, value_enum, default_value_t = TargetChoice::Order)]
    target: TargetChoice,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetChoice {
    Order,
    Shipping,
}

impl From<TargetChoice> for VoucherTarget {
    fn from(choice: TargetChoice) -> Self {
        match choice {
            TargetChoice::Order => Self::Order,
            TargetChoice::Shipping => Self::Shipping,
        }
    }
}

pub(crate) fn run(args: RemoveVoucherArgs, context: &AppContext) -> Result<(), String> {
    let removed = context
        .vouchers
        .remove(args.target.into())
        .map_err(|error| format!("failed to remove voucher: {error}"))?;

    match removed {
        Some(applied) => println!("removed {}", applied.code),
        None => println!("no voucher applied to the {} slot", VoucherTarget::from(args.target)),
    }

    Ok(())
}
