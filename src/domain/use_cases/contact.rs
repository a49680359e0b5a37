use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::contact::{Contact, ContactForm},
    errors::AppError,
    mail::{Mailer, OutgoingEmail},
    settings::AppConfig,
    shared_repos::ContactStore,
};

pub struct ContactHandler {
    pub contact_repo: ContactStore,
    mailer: Arc<dyn Mailer>,
    sender: String,
    recipient: Option<String>,
}

impl ContactHandler {
    pub fn new(
        contact_repo: ContactStore,
        mailer: Arc<dyn Mailer>,
        sender: String,
        recipient: Option<String>,
    ) -> Self {
        ContactHandler {
            contact_repo,
            mailer,
            sender,
            recipient,
        }
    }

    pub fn from_config(config: &AppConfig, contact_repo: ContactStore, mailer: Arc<dyn Mailer>) -> Self {
        Self::new(contact_repo, mailer, config.mail_sender(), config.mail_recipient())
    }

    /// Validates and stores a contact form submission, then notifies the site owner.
    /// A failed notification never fails the submission.
    pub async fn submit(&self, form: ContactForm) -> Result<Contact, AppError> {
        let form = form.trimmed();
        form.validate()?;

        let contact = self.contact_repo.create(&form.into_new_contact()).await?;
        tracing::info!(contact_id = contact.id, "Contact message stored");

        self.notify(&contact).await;

        Ok(contact)
    }

    async fn notify(&self, contact: &Contact) {
        let Some(recipient) = &self.recipient else {
            tracing::debug!(contact_id = contact.id, "No mail recipient configured, skipping notification");
            return;
        };

        let email = notification_email(contact, &self.sender, recipient);

        if let Err(e) = self.mailer.send(&email).await {
            tracing::warn!(contact_id = contact.id, "Contact notification failed: {}", e);
        }
    }
}

fn notification_email(contact: &Contact, sender: &str, recipient: &str) -> OutgoingEmail {
    OutgoingEmail {
        from: sender.to_string(),
        to: recipient.to_string(),
        subject: format!("New message from {}", contact.name),
        body: format!(
            "Name: {}\nEmail: {}\nMessage: {}\n",
            contact.name, contact.email, contact.message
        ),
    }
}
