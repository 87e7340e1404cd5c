use anyhow::Result;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;
use std::sync::Arc;

use crate::config::{Config, ProviderConfig};

const SUBJECT: &str = "New notify signup";

/// A sender that relays one signup notification to the agency inbox.
/// The submitted address goes into the reply-to header so the inbox
/// can answer the prospect directly.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, reply_to: &str) -> Result<()>;
}

/// Builds the sender selected by `MAIL_PROVIDER`. Exactly one variant
/// is live per deployment.
pub fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>> {
    match &config.provider {
        ProviderConfig::Resend { api_key } => Ok(Arc::new(ResendMailer::new(
            api_key,
            &config.from,
            &config.to,
        ))),
        ProviderConfig::Smtp {
            server,
            port,
            email,
            password,
        } => {
            let mailer = SmtpMailer::new(server, *port, email, password, &config.from, &config.to)?;
            Ok(Arc::new(mailer))
        }
    }
}

/// Transactional-API variant.
pub struct ResendMailer {
    client: Resend,
    from: String,
    to: String,
}

impl ResendMailer {
    pub fn new(api_key: &str, from: &str, to: &str) -> Self {
        ResendMailer {
            client: Resend::new(api_key),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, reply_to: &str) -> Result<()> {
        let text = format!("New email subscribed: {}", reply_to);
        let html = format!(
            r#"<div style="font-family:Inter,Arial,sans-serif">
  <h2>New notify signup</h2>
  <p><b>Email:</b> {}</p>
</div>"#,
            reply_to
        );

        let email = CreateEmailBaseOptions::new(self.from.as_str(), [self.to.as_str()], SUBJECT)
            .with_reply(reply_to)
            .with_text(&text)
            .with_html(&html);

        self.client.emails.send(email).await?;
        Ok(())
    }
}

/// Direct SMTP submission variant.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl SmtpMailer {
    pub fn new(
        server: &str,
        port: u16,
        smtp_email: &str,
        smtp_password: &str,
        from: &str,
        to: &str,
    ) -> Result<Self> {
        let creds = Credentials::new(smtp_email.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(server)?
            .port(port)
            .credentials(creds)
            .build();

        Ok(SmtpMailer {
            transport,
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, reply_to: &str) -> Result<()> {
        let message = Message::builder()
            .from(self.from.parse()?)
            .to(self.to.parse()?)
            .reply_to(reply_to.parse()?)
            .subject(SUBJECT)
            .body(format!("New email subscribed: {}", reply_to))?;

        self.transport.send(message).await?;
        Ok(())
    }
}
