// storefront-site/src/pages/forms.rs

//! Partner application and contact forms.

use super::views::{ApplicationView, ContactView};
use super::widgets::{self, InputKind};
use storefront_core::{Markup, Section};

pub struct ApplicationFormSection;

impl Section<ApplicationView> for ApplicationFormSection {
  fn name(&self) -> &str {
    "application_form"
  }

  fn render(&self, view: &ApplicationView, out: &mut Markup) -> anyhow::Result<()> {
    let kind = view.kind;
    let form = &view.form;
    let errors = &view.errors;
    out.open("section", &[("class", "application-form")]);
    out.element("h2", &[], &format!("{} application", kind.label()));
    widgets::error_summary(out, errors);
    out.open("form", &[("method", "post"), ("action", kind.path())]);
    widgets::text_field(out, "full_name", "Full name", &form.full_name, InputKind::Text, true, errors.message_for("full_name"));
    widgets::text_field(out, "email", "Email", &form.email, InputKind::Email, true, errors.message_for("email"));
    widgets::text_field(
      out,
      "company",
      "Company or brand",
      &form.company,
      InputKind::Text,
      kind.requires_company(),
      errors.message_for("company"),
    );
    widgets::text_field(
      out,
      "website",
      "Website or channel",
      &form.website,
      InputKind::Url,
      kind.requires_website(),
      errors.message_for("website"),
    );
    widgets::text_area(out, "details", kind.details_label(), &form.details, 4, true, errors.message_for("details"));
    widgets::text_area(out, "message", "Anything else?", &form.message, 4, false, errors.message_for("message"));
    widgets::checkbox(
      out,
      "agree_terms",
      "I have read and accept the program terms.",
      form.agreed_to_terms(),
      errors.message_for("agree_terms"),
    );
    widgets::submit(out, "Send application");
    out.close("form");
    out.close("section");
    Ok(())
  }
}

pub struct ContactFormSection;

impl Section<ContactView> for ContactFormSection {
  fn name(&self) -> &str {
    "contact_form"
  }

  fn render(&self, view: &ContactView, out: &mut Markup) -> anyhow::Result<()> {
    let form = &view.form;
    let errors = &view.errors;
    out.open("section", &[("class", "contact-form")]);
    out.element("h2", &[], "Send us a message");
    widgets::error_summary(out, errors);
    out.open("form", &[("method", "post"), ("action", "/contact")]);
    widgets::text_field(out, "name", "Name", &form.name, InputKind::Text, true, errors.message_for("name"));
    widgets::text_field(out, "email", "Email", &form.email, InputKind::Email, true, errors.message_for("email"));
    widgets::text_field(out, "subject", "Subject", &form.subject, InputKind::Text, false, errors.message_for("subject"));
    widgets::text_area(out, "message", "Message", &form.message, 6, true, errors.message_for("message"));
    widgets::submit(out, "Send message");
    out.close("form");
    out.close("section");
    Ok(())
  }
}
