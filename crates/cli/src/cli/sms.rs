use clap::Args;
use jiff::Timestamp;

use super::Context;

#[derive(Debug, Args)]
pub(crate) struct SmsArgs {
    /// Client whose card link is sent
    #[arg(long)]
    client_id: i64,

    /// Message text; %LINK% is replaced with the card link
    #[arg(long)]
    message: String,

    /// When to send (RFC 3339); now when omitted
    #[arg(long)]
    at: Option<Timestamp>,
}

pub(crate) async fn run(context: &Context, args: SmsArgs) -> Result<(), String> {
    let send_at = args.at.unwrap_or_else(Timestamp::now);

    let queued = context
        .service
        .send_sms(args.client_id, args.message, send_at)
        .await
        .map_err(|error| format!("failed to send sms: {error}"))?;

    if !queued {
        return Err(format!("sms to client {} was not accepted", args.client_id));
    }

    #[expect(clippy::print_stdout, reason = "command output goes to stdout")]
    {
        println!("sms queued for client {} at {send_at}", args.client_id);
    }

    Ok(())
}
