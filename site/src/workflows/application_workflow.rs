// storefront-site/src/workflows/application_workflow.rs

//! Partner program applications (affiliate, vendor, blogger, content creator).

use crate::errors::AppError;
use crate::models::Application;
use crate::workflows::common_steps::{halt_on_errors, send_notification};
use crate::workflows::contexts::ApplicationCtx;
use storefront_core::{escape, Flow, Registry, Shared, Workflow};
use tracing::info;

pub fn build_application_workflow() -> Workflow<ApplicationCtx, AppError> {
  let mut wf = Workflow::<ApplicationCtx, AppError>::new(&[
    ("validate_application", false, None),
    ("store_application", false, None),
    ("notify_team", true, None),
    ("acknowledge_applicant", true, None),
  ]);

  wf.on("validate_application", |ctx: Shared<ApplicationCtx>| async move {
    let mut guard = ctx.write();
    let found = guard.form.validate(guard.kind);
    Ok::<_, AppError>(halt_on_errors(&mut guard.errors, found))
  });

  wf.on("store_application", |ctx: Shared<ApplicationCtx>| async move {
    let mut guard = ctx.write();
    let application = Application::from_form(guard.kind, &guard.form);
    guard.app_state.submissions.add_application(application.clone());
    info!(id = %application.id, kind = %application.kind, "Application stored.");
    guard.application = Some(application);
    Ok::<_, AppError>(Flow::Continue)
  });

  wf.on("notify_team", |ctx: Shared<ApplicationCtx>| async move {
    let (app_state, application) = {
      let guard = ctx.read();
      (guard.app_state.clone(), guard.application.clone())
    };
    let application =
      application.ok_or_else(|| AppError::Internal("Application missing after store stage.".to_string()))?;

    let subject = format!("New {} application from {}", application.kind.label().to_lowercase(), application.full_name);
    let body = format!(
      "<p><strong>{}</strong> &lt;{}&gt; applied to the {} program.</p>\
       <p>Company: {}<br>Website: {}</p><p>{}</p><p>{}</p>",
      escape(&application.full_name),
      escape(&application.email),
      escape(application.kind.label()),
      escape(&application.company),
      escape(&application.website),
      escape(&application.details),
      escape(&application.message),
    );
    send_notification(&app_state.mailer, &app_state.config.notify_inbox, &subject, &body).await?;
    ctx.write().team_notified = true;
    Ok::<_, AppError>(Flow::Continue)
  });

  wf.on("acknowledge_applicant", |ctx: Shared<ApplicationCtx>| async move {
    let (app_state, application) = {
      let guard = ctx.read();
      (guard.app_state.clone(), guard.application.clone())
    };
    let application =
      application.ok_or_else(|| AppError::Internal("Application missing after store stage.".to_string()))?;

    let subject = format!(
      "We received your {} application",
      application.kind.label().to_lowercase()
    );
    let body = format!(
      "<p>Hi {},</p><p>Thanks for applying to the {} {} program. \
       We review every application and will get back to you within a few business days.</p>",
      escape(&application.full_name),
      escape(&app_state.config.site_name),
      escape(&application.kind.label().to_lowercase()),
    );
    send_notification(&app_state.mailer, &application.email, &subject, &body).await?;
    ctx.write().applicant_acknowledged = true;
    Ok::<_, AppError>(Flow::Continue)
  });

  wf
}

pub fn register_application_workflow(registry: &Registry<AppError>) {
  registry.register(build_application_workflow());
  info!("Application workflow registered.");
}
