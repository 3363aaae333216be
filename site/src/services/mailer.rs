// storefront-site/src/services/mailer.rs

//! Mock outbound mail. Messages are logged and kept in an in-memory outbox.

use crate::errors::{AppError, Result as AppResult};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct SentEmail {
  pub to: String,
  pub from: String,
  pub subject: String,
  pub body_preview: String, // First 50 chars of body
  pub message_id: String,
  pub sent_at: DateTime<Utc>,
}

pub struct Mailer {
  sender: String,
  outbox: RwLock<Vec<SentEmail>>,
}

impl Mailer {
  pub fn new(sender: impl Into<String>) -> Self {
    Self {
      sender: sender.into(),
      outbox: RwLock::new(Vec::new()),
    }
  }

  pub async fn send(&self, to: &str, subject: &str, html_body: &str) -> AppResult<SentEmail> {
    info!(to, from = %self.sender, subject, "Simulating sending email.");
    tokio::time::sleep(std::time::Duration::from_millis(5)).await; // Simulate network latency

    // Hook for exercising failure paths.
    if subject.to_lowercase().contains("fail_test") {
      warn!(subject, "Simulated email failure.");
      return Err(AppError::Notification("Simulated email send failure".to_string()));
    }

    let body_preview = html_body.chars().take(50).collect::<String>() + "...";
    let sent = SentEmail {
      to: to.to_string(),
      from: self.sender.clone(),
      subject: subject.to_string(),
      body_preview,
      message_id: format!("mock_email_{}", uuid::Uuid::new_v4()),
      sent_at: Utc::now(),
    };
    info!(message_id = %sent.message_id, "Mock email sent successfully.");
    self.outbox.write().push(sent.clone());
    Ok(sent)
  }

  pub fn outbox(&self) -> Vec<SentEmail> {
    self.outbox.read().clone()
  }

  pub fn sent_count(&self) -> usize {
    self.outbox.read().len()
  }
}
