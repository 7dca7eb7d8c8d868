use std::io;

use tracing_subscriber::EnvFilter;
use wavecell_verify::{AccountConfig, SmsTemplate, WavecellClient};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = required_env("WAVECELL_API_KEY")?;
    let sub_account_id = required_env("WAVECELL_SUB_ACCOUNT_ID")?;
    let phone = required_env("WAVECELL_PHONE")?;
    let source = std::env::var("WAVECELL_SMS_SOURCE").unwrap_or_else(|_| "Verify".to_owned());
    let text = std::env::var("WAVECELL_SMS_TEXT")
        .unwrap_or_else(|_| "Your verification code is {code}".to_owned());

    let client = WavecellClient::new();
    let account = AccountConfig::api_key(api_key).with_sub_account_id(sub_account_id);
    let template = SmsTemplate::new(source, text);

    let response = client
        .send_otp(&phone, Some(&template), &account, None)
        .await?;
    println!(
        "resourceUri: {:?}",
        wavecell_verify::resource_uri(&response)
    );
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
