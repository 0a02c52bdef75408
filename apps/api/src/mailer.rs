//! Outbound email over the external SMTP relay.
//!
//! The mailer is best-effort by contract: callers on the request path log
//! and swallow send failures, so nothing here may panic or retry.

use anyhow::{Context, Result};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::config::Config;
use crate::models::waitlist::UserType;

pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    site_url: String,
}

impl Mailer {
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .context("Failed to create SMTP transport")?
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        let from = config
            .mail_from
            .parse::<Mailbox>()
            .context("MAIL_FROM is not a valid mailbox")?;

        Ok(Self {
            transport,
            from,
            site_url: config.site_url.clone(),
        })
    }

    /// Sends the waitlist confirmation. Failure here must never fail the
    /// signup that triggered it.
    pub async fn send_waitlist_confirmation(&self, to: &str, user_type: UserType) -> Result<()> {
        let to = to
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid recipient address: {to}"))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject("You're on the list")
            .header(ContentType::TEXT_HTML)
            .body(waitlist_confirmation_body(user_type, &self.site_url))
            .context("Failed to build confirmation message")?;

        self.transport
            .send(message)
            .await
            .context("SMTP send failed")?;

        Ok(())
    }
}

/// Pure body builder, split out so it can be tested without a transport.
fn waitlist_confirmation_body(user_type: UserType, site_url: &str) -> String {
    let pitch = match user_type {
        UserType::Employer => "You'll be first in line to post jobs and reach vetted candidates.",
        UserType::Jobseeker => "You'll be first in line to browse openings and build your profile.",
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>You're on the list</title>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .footer {{ margin-top: 30px; font-size: 12px; color: #666; }}
    </style>
</head>
<body>
    <div class="container">
        <h2>You're on the waitlist</h2>

        <p>Thanks for signing up. We've saved your spot.</p>

        <p>{pitch}</p>

        <p>We'll email you the moment we open the doors. In the meantime, you
        can learn more at <a href="{site_url}">{site_url}</a>.</p>

        <div class="footer">
            <p>This is an automated message, please do not reply to this email.</p>
        </div>
    </div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_body_mentions_employer_pitch() {
        let body = waitlist_confirmation_body(UserType::Employer, "https://example.com");
        assert!(body.contains("post jobs"));
        assert!(body.contains("https://example.com"));
    }

    #[test]
    fn test_confirmation_body_mentions_jobseeker_pitch() {
        let body = waitlist_confirmation_body(UserType::Jobseeker, "https://example.com");
        assert!(body.contains("browse openings"));
    }

    #[test]
    fn test_confirmation_body_is_html_document() {
        let body = waitlist_confirmation_body(UserType::Employer, "https://example.com");
        assert!(body.starts_with("<!DOCTYPE html>"));
    }
}
