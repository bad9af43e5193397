//! Table and money rendering for the terminal.

use rusty_money::{Money, iso};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

/// Format a minor-unit amount as Vietnamese dong.
pub(crate) fn vnd(minor: u64) -> String {
    Money::from_minor(i64::try_from(minor).unwrap_or(i64::MAX), iso::VND).to_string()
}

/// Print `builder` as a table, right-aligning every column from
/// `first_amount_column` on.
pub(crate) fn print_table(builder: Builder, first_amount_column: usize) {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(first_amount_column..), Alignment::right());

    println!("{table}");
}
