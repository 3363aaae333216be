// storefront-site/src/models/application.rs

//! Partner program applications and contact messages.

use super::validation::{is_email, is_optional_url, FieldErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationKind {
  Affiliate,
  Vendor,
  Blogger,
  ContentCreator,
}

impl ApplicationKind {
  pub const ALL: [ApplicationKind; 4] = [
    ApplicationKind::Affiliate,
    ApplicationKind::Vendor,
    ApplicationKind::Blogger,
    ApplicationKind::ContentCreator,
  ];

  /// Route of the kind's application page.
  pub fn path(self) -> &'static str {
    match self {
      ApplicationKind::Affiliate => "/affiliates",
      ApplicationKind::Vendor => "/vendor-app",
      ApplicationKind::Blogger => "/blogger-app",
      ApplicationKind::ContentCreator => "/content-creator-app",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      ApplicationKind::Affiliate => "Affiliate",
      ApplicationKind::Vendor => "Vendor",
      ApplicationKind::Blogger => "Blogger",
      ApplicationKind::ContentCreator => "Content creator",
    }
  }

  /// Label of the free-text "details" field, which differs per program.
  pub fn details_label(self) -> &'static str {
    match self {
      ApplicationKind::Affiliate => "How will you promote our products?",
      ApplicationKind::Vendor => "What products would you like to sell?",
      ApplicationKind::Blogger => "What do you write about?",
      ApplicationKind::ContentCreator => "Which platforms do you create on, and for how many followers?",
    }
  }

  /// Vendors must name their business.
  pub fn requires_company(self) -> bool {
    matches!(self, ApplicationKind::Vendor)
  }

  /// Bloggers and creators are judged on their published work.
  pub fn requires_website(self) -> bool {
    matches!(self, ApplicationKind::Blogger | ApplicationKind::ContentCreator)
  }
}

impl fmt::Display for ApplicationKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Application form payload; the kind comes from the route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
  pub full_name: String,
  pub email: String,
  #[serde(default)]
  pub company: String,
  #[serde(default)]
  pub website: String,
  #[serde(default)]
  pub details: String,
  #[serde(default)]
  pub message: String,
  /// Checkbox: present (any value) when ticked.
  #[serde(default)]
  pub agree_terms: Option<String>,
}

impl ApplicationForm {
  pub fn agreed_to_terms(&self) -> bool {
    self.agree_terms.is_some()
  }

  pub fn validate(&self, kind: ApplicationKind) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.require("full_name", &self.full_name, "Please enter your full name.");
    if !is_email(&self.email) {
      errors.add("email", "Please enter a valid email address.");
    }
    if kind.requires_company() {
      errors.require("company", &self.company, "Please enter your company or brand name.");
    }
    if kind.requires_website() && self.website.trim().is_empty() {
      errors.add("website", "Please link to your blog or channel.");
    } else if !is_optional_url(&self.website) {
      errors.add("website", "Website must start with http:// or https://.");
    }
    errors.require("details", &self.details, "Please tell us a little more.");
    if self.message.chars().count() > MAX_MESSAGE_CHARS {
      errors.add("message", "Messages are limited to 4000 characters.");
    }
    if !self.agreed_to_terms() {
      errors.add("agree_terms", "You need to accept the program terms.");
    }
    errors
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct Application {
  pub id: Uuid,
  pub kind: ApplicationKind,
  pub full_name: String,
  pub email: String,
  pub company: String,
  pub website: String,
  pub details: String,
  pub message: String,
  pub agreed_to_terms: bool,
  pub submitted_at: DateTime<Utc>,
}

impl Application {
  pub fn from_form(kind: ApplicationKind, form: &ApplicationForm) -> Self {
    Self {
      id: Uuid::new_v4(),
      kind,
      full_name: form.full_name.trim().to_string(),
      email: form.email.trim().to_string(),
      company: form.company.trim().to_string(),
      website: form.website.trim().to_string(),
      details: form.details.trim().to_string(),
      message: form.message.trim().to_string(),
      agreed_to_terms: form.agreed_to_terms(),
      submitted_at: Utc::now(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
  pub name: String,
  pub email: String,
  #[serde(default)]
  pub subject: String,
  pub message: String,
}

impl ContactForm {
  pub fn validate(&self) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.require("name", &self.name, "Please enter your name.");
    if !is_email(&self.email) {
      errors.add("email", "Please enter a valid email address.");
    }
    errors.require("message", &self.message, "Please enter a message.");
    if self.message.chars().count() > MAX_MESSAGE_CHARS {
      errors.add("message", "Messages are limited to 4000 characters.");
    }
    errors
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
  pub id: Uuid,
  pub name: String,
  pub email: String,
  pub subject: String,
  pub message: String,
  pub submitted_at: DateTime<Utc>,
}

impl ContactMessage {
  pub fn from_form(form: &ContactForm) -> Self {
    let subject = form.subject.trim();
    Self {
      id: Uuid::new_v4(),
      name: form.name.trim().to_string(),
      email: form.email.trim().to_string(),
      subject: if subject.is_empty() {
        "General enquiry".to_string()
      } else {
        subject.to_string()
      },
      message: form.message.trim().to_string(),
      submitted_at: Utc::now(),
    }
  }
}
