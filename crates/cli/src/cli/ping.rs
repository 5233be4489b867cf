use super::Context;

pub(crate) async fn run(context: &Context) -> Result<(), String> {
    let valid = context
        .service
        .is_token_valid()
        .await
        .map_err(|error| format!("failed to check token: {error}"))?;

    if !valid {
        return Err("token rejected by the loyalty service".to_string());
    }

    #[expect(clippy::print_stdout, reason = "command output goes to stdout")]
    {
        println!("token ok");
    }

    Ok(())
}
