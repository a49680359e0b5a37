use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use derive_more::Display;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::settings::MailSettings;

const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Display)]
pub enum MailError {
    #[display("Mail delivery is not configured")]
    NotConfigured,

    #[display("Invalid address: {_0}")]
    InvalidAddress(String),

    #[display("Could not build message: {_0}")]
    Build(String),

    #[display("SMTP transport error: {_0}")]
    Transport(String),
}

impl std::error::Error for MailError {}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Used when no SMTP server is configured; every send reports `NotConfigured`.
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(settings: &MailSettings) -> Result<Self, MailError> {
        let builder = if settings.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.server)
                .map_err(|e| MailError::Transport(e.to_string()))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.server)
        };

        let mut builder = builder.port(settings.port).timeout(Some(SMTP_TIMEOUT));

        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(SmtpMailer {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let from: Mailbox = email
            .from
            .parse()
            .map_err(|_| MailError::InvalidAddress(email.from.clone()))?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(email.to.clone()))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;

        Ok(())
    }
}

/// SMTP mailer when configured, otherwise a disabled one.
pub fn mailer_from_settings(settings: Option<&MailSettings>) -> Arc<dyn Mailer> {
    match settings.map(SmtpMailer::new) {
        Some(Ok(mailer)) => Arc::new(mailer),
        Some(Err(e)) => {
            tracing::error!("SMTP transport could not be configured: {}", e);
            Arc::new(DisabledMailer)
        }
        None => {
            tracing::info!("No mail server configured, contact notifications are disabled");
            Arc::new(DisabledMailer)
        }
    }
}
