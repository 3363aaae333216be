// storefront-site/src/services/submission_store.rs

//! Partner applications and contact messages received through the site.

use crate::models::{Application, ApplicationKind, ContactMessage};
use parking_lot::RwLock;

#[derive(Default)]
pub struct SubmissionStore {
  applications: RwLock<Vec<Application>>,
  messages: RwLock<Vec<ContactMessage>>,
}

impl SubmissionStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_application(&self, application: Application) {
    self.applications.write().push(application);
  }

  pub fn add_message(&self, message: ContactMessage) {
    self.messages.write().push(message);
  }

  pub fn applications(&self, kind: Option<ApplicationKind>) -> Vec<Application> {
    self
      .applications
      .read()
      .iter()
      .filter(|a| kind.map_or(true, |k| a.kind == k))
      .cloned()
      .collect()
  }

  /// `(kind, count)` for every kind, zeros included.
  pub fn application_counts(&self) -> Vec<(ApplicationKind, usize)> {
    let guard = self.applications.read();
    ApplicationKind::ALL
      .iter()
      .map(|kind| (*kind, guard.iter().filter(|a| a.kind == *kind).count()))
      .collect()
  }

  pub fn message_count(&self) -> usize {
    self.messages.read().len()
  }

  pub fn messages(&self) -> Vec<ContactMessage> {
    self.messages.read().clone()
  }
}
