// storefront-site/src/web/handlers/form_handlers.rs

//! Partner applications and the contact form. Successful posts redirect to
//! `?submitted=1` so a reload does not send the form twice.

use super::page_handlers::SubmittedQuery;
use super::{chrome_for, html, see_other};
use crate::errors::AppError;
use crate::models::{ApplicationForm, ApplicationKind, ContactForm};
use crate::pages::{ApplicationView, ContactView};
use crate::state::AppState;
use crate::web::extractors::CartSession;
use crate::workflows::{ApplicationCtx, ContactCtx};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use storefront_core::{Outcome, Shared};
use tracing::{info, instrument, warn};

pub async fn application_page(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
  kind: web::Data<ApplicationKind>,
  query: web::Query<SubmittedQuery>,
) -> Result<HttpResponse, AppError> {
  let mut chrome = chrome_for(&req, &state, &session);
  if query.submitted.is_some() {
    chrome = chrome.with_notice("Thanks for applying! We'll review your application and get back to you.");
  }
  let view = ApplicationView {
    chrome,
    kind: **kind,
    form: ApplicationForm::default(),
    errors: Default::default(),
  };
  Ok(html(StatusCode::OK, state.pages.application(**kind).render(&view)?))
}

#[instrument(name = "handler::submit_application", skip_all, fields(kind = %kind.label()))]
pub async fn submit_application(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
  kind: web::Data<ApplicationKind>,
  form: web::Form<ApplicationForm>,
) -> Result<HttpResponse, AppError> {
  let kind = **kind;
  let form = form.into_inner();
  let ctx = Shared::new(ApplicationCtx::new(state.get_ref().clone(), kind, form.clone()));

  match state.workflows.run(ctx.clone()).await? {
    Outcome::Completed => {
      let guard = ctx.read();
      info!(
        team_notified = guard.team_notified,
        applicant_acknowledged = guard.applicant_acknowledged,
        "Application received."
      );
      Ok(see_other(&format!("{}?submitted=1", kind.path())))
    }
    Outcome::Halted => {
      let errors = ctx.read().errors.clone();
      warn!(errors = %errors.summary(), "Application rejected.");
      let view = ApplicationView {
        chrome: chrome_for(&req, &state, &session),
        kind,
        form,
        errors,
      };
      Ok(html(
        StatusCode::UNPROCESSABLE_ENTITY,
        state.pages.application(kind).render(&view)?,
      ))
    }
  }
}

#[instrument(name = "handler::submit_contact", skip_all)]
pub async fn submit_contact(
  req: HttpRequest,
  state: web::Data<AppState>,
  session: CartSession,
  form: web::Form<ContactForm>,
) -> Result<HttpResponse, AppError> {
  let form = form.into_inner();
  let ctx = Shared::new(ContactCtx::new(state.get_ref().clone(), form.clone()));

  match state.workflows.run(ctx.clone()).await? {
    Outcome::Completed => {
      info!(team_notified = ctx.read().team_notified, "Contact message received.");
      Ok(see_other("/contact?submitted=1"))
    }
    Outcome::Halted => {
      let errors = ctx.read().errors.clone();
      warn!(errors = %errors.summary(), "Contact message rejected.");
      let view = ContactView {
        chrome: chrome_for(&req, &state, &session),
        form,
        errors,
      };
      Ok(html(StatusCode::UNPROCESSABLE_ENTITY, state.pages.contact.render(&view)?))
    }
  }
}
