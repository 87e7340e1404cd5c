use anyhow::{anyhow, Context, Result};
use std::env;

/// Runtime configuration, read once at startup from the environment.
#[derive(Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Fixed sender identity, e.g. `Agency <no-reply@agency.com>`.
    pub from: String,
    /// The inbox every signup notification is relayed to.
    pub to: String,
    pub provider: ProviderConfig,
}

/// The two deployment variants are mutually exclusive; the unselected
/// variant's credentials are ignored.
#[derive(Clone)]
pub enum ProviderConfig {
    Resend {
        api_key: String,
    },
    Smtp {
        server: String,
        port: u16,
        email: String,
        password: String,
    },
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let from = env::var("NOTIFY_FROM").context("NOTIFY_FROM must be set")?;
        let to = env::var("NOTIFY_TO").context("NOTIFY_TO must be set")?;

        let provider_name = env::var("MAIL_PROVIDER").unwrap_or_else(|_| "resend".to_string());
        let provider = match provider_name.as_str() {
            "resend" => ProviderConfig::Resend {
                api_key: env::var("RESEND_API_KEY").context("RESEND_API_KEY must be set")?,
            },
            "smtp" => ProviderConfig::Smtp {
                server: env::var("SMTP_SERVER").context("SMTP_SERVER must be set")?,
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse()
                    .context("Invalid SMTP_PORT")?,
                email: env::var("SMTP_EMAIL").context("SMTP_EMAIL must be set")?,
                password: env::var("SMTP_PASSWORD").context("SMTP_PASSWORD must be set")?,
            },
            other => return Err(anyhow!("Unknown MAIL_PROVIDER: {}", other)),
        };

        Ok(Config {
            bind_addr,
            from,
            to,
            provider,
        })
    }
}
