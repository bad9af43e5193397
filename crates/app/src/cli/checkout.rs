use clap::{Args, ValueEnum};

use floret::checkout::{CheckoutForm, CheckoutOutcome, PaymentMethod};
use floret_app::{context::AppContext, domain::checkout::CheckoutError};

use crate::cli::render;

#[derive(Debug, Args)]
pub(crate) struct PlaceOrderArgs {
    /// Recipient name
    #[arg(long)]
    name: String,

    /// Recipient phone number
    #[arg(long)]
    phone: String,

    /// Contact email
    #[arg(long)]
    email: String,

    /// Delivery address
    #[arg(long)]
    address: String,

    /// How to pay
    #[arg(long, value_enum, default_value_t = PaymentChoice::Cod)]
    payment: PaymentChoice,

    /// Optional message to the florist
    #[arg(long)]
    note: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PaymentChoice {
    /// Cash on delivery
    Cod,
    /// Online payment gateway
    Gateway,
}

impl From<PaymentChoice> for PaymentMethod {
    fn from(choice: PaymentChoice) -> Self {
        match choice {
            PaymentChoice::Cod => Self::Cod,
            PaymentChoice::Gateway => Self::Gateway,
        }
    }
}

pub(crate) async fn run(args: PlaceOrderArgs, context: &AppContext) -> Result<(), String> {
    let form = CheckoutForm {
        customer_name: args.name,
        customer_phone: args.phone,
        customer_email: args.email,
        shipping_address: args.address,
        payment_method: args.payment.into(),
        note: args.note,
    };

    let mut flow = context.checkout();

    let outcome = flow.submit(&form).await.map_err(|error| match error {
        CheckoutError::InvalidForm(errors) => {
            let details: Vec<String> = errors.iter().map(ToString::to_string).collect();

            format!("the checkout form is not valid:\n  {}", details.join("\n  "))
        }
        other => format!("checkout failed: {other}"),
    })?;

    match outcome {
        CheckoutOutcome::Placed { order } => {
            println!("order placed");
            println!("order_id: {}", order.id);
            println!("status: {}", order.status);
            println!("total: {}", render::vnd(order.total));
        }
        CheckoutOutcome::RedirectToGateway { url } => {
            println!("finish the payment in your browser:");
            println!("{url}");
        }
    }

    Ok(())
}
