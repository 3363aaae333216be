// storefront-site/src/workflows/contact_workflow.rs

use crate::errors::AppError;
use crate::models::ContactMessage;
use crate::workflows::common_steps::{halt_on_errors, send_notification};
use crate::workflows::contexts::ContactCtx;
use storefront_core::{escape, Flow, Registry, Shared, Workflow};
use tracing::info;

pub fn build_contact_workflow() -> Workflow<ContactCtx, AppError> {
  let mut wf = Workflow::<ContactCtx, AppError>::new(&[
    ("validate_message", false, None),
    ("store_message", false, None),
    ("notify_team", true, None),
  ]);

  wf.on("validate_message", |ctx: Shared<ContactCtx>| async move {
    let mut guard = ctx.write();
    let found = guard.form.validate();
    Ok::<_, AppError>(halt_on_errors(&mut guard.errors, found))
  });

  wf.on("store_message", |ctx: Shared<ContactCtx>| async move {
    let mut guard = ctx.write();
    let message = ContactMessage::from_form(&guard.form);
    guard.app_state.submissions.add_message(message.clone());
    info!(id = %message.id, subject = %message.subject, "Contact message stored.");
    guard.message = Some(message);
    Ok::<_, AppError>(Flow::Continue)
  });

  wf.on("notify_team", |ctx: Shared<ContactCtx>| async move {
    let (app_state, message) = {
      let guard = ctx.read();
      (guard.app_state.clone(), guard.message.clone())
    };
    let message = message.ok_or_else(|| AppError::Internal("Message missing after store stage.".to_string()))?;

    let subject = format!("Contact form: {}", message.subject);
    let body = format!(
      "<p>From <strong>{}</strong> &lt;{}&gt;</p><p>{}</p>",
      escape(&message.name),
      escape(&message.email),
      escape(&message.message),
    );
    send_notification(&app_state.mailer, &app_state.config.notify_inbox, &subject, &body).await?;
    ctx.write().team_notified = true;
    Ok::<_, AppError>(Flow::Continue)
  });

  wf
}

pub fn register_contact_workflow(registry: &Registry<AppError>) {
  registry.register(build_contact_workflow());
  info!("Contact workflow registered.");
}
