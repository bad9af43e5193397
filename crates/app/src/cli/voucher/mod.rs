use clap::{Args, Subcommand};
use tabled::builder::Builder;

use floret::voucher::{Voucher, VoucherValue};
use floret_app::context::AppContext;

use crate::cli::render;

mod apply;
mod list;
mod remove;
mod save;
mod wallet;

#[derive(Debug, Args)]
pub(crate) struct VoucherCommand {
    #[command(subcommand)]
    command: VoucherSubcommand,
}

#[derive(Debug, Subcommand)]
enum VoucherSubcommand {
    Apply(apply::ApplyVoucherArgs),
    Remove(remove::RemoveVoucherArgs),
    List,
    Wallet,
    Save(save::SaveVoucherArgs),
}

pub(crate) async fn run(command: VoucherCommand, context: &AppContext) -> Result<(), String> {
    match command.command {
        VoucherSubcommand::Apply(args) => apply::run(args, context).await,
        VoucherSubcommand::Remove(args) => remove::run(args, context),
        VoucherSubcommand::List => list::run(context).await,
        VoucherSubcommand::Wallet => wallet::run(context).await,
        VoucherSubcommand::Save(args) => save::run(args, context).await,
    }
}

fn print_vouchers(vouchers: &[Voucher]) {
    let mut builder = Builder::default();

    builder.push_record(["Code", "Description", "Discount", "Min Order", "Target", "Expires"]);

    for voucher in vouchers {
        builder.push_record([
            voucher.code.clone(),
            voucher.description.clone().unwrap_or_default(),
            discount_cell(voucher),
            render::vnd(voucher.min_order_value),
            voucher.target.to_string(),
            voucher
                .expires_at
                .map_or_else(|| "none".to_string(), |value| value.to_string()),
        ]);
    }

    render::print_table(builder, 2);
}

fn discount_cell(voucher: &Voucher) -> String {
    match voucher.value {
        VoucherValue::Percent(percent) => match voucher.max_discount {
            Some(cap) => format!("{percent}% (up to {})", render::vnd(cap)),
            None => format!("{percent}%"),
        },
        VoucherValue::Fixed(amount) => render::vnd(amount),
    }
}
