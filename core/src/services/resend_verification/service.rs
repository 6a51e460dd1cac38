//! Resend verification service implementation

use std::future::Future;
use std::sync::Arc;

use tokio::time::Instant;
use validator::Validate;
use vc_shared::utils::email::mask_email;

use crate::domain::entities::audit::{actions, AuditLog};
use crate::domain::entities::user::User;
use crate::domain::entities::verification_code::{CodeKey, IssuedCode};
use crate::errors::{ResendError, WorkflowStage};
use crate::repositories::{AuditLogRepository, UserRepository};
use crate::services::verification::{CodeGenerator, EmailNotifier, VerificationCodeStore};

use super::config::ResendVerificationConfig;
use super::context::{deadline_after, CallContext};
use super::types::{RequestContext, ResendOutcome, ResendVerificationCommand};

/// Status reported to the caller and recorded in the audit trail on success
const SUCCESS_STATUS: u16 = 200;

/// Re-issues email verification codes
///
/// Stateless apart from its collaborators; safe to share across tasks.
pub struct ResendVerificationService {
    user_repository: Arc<dyn UserRepository>,
    code_generator: Arc<dyn CodeGenerator>,
    code_store: Arc<dyn VerificationCodeStore>,
    email_notifier: Arc<dyn EmailNotifier>,
    audit_repository: Arc<dyn AuditLogRepository>,
    config: ResendVerificationConfig,
}

impl ResendVerificationService {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        code_generator: Arc<dyn CodeGenerator>,
        code_store: Arc<dyn VerificationCodeStore>,
        email_notifier: Arc<dyn EmailNotifier>,
        audit_repository: Arc<dyn AuditLogRepository>,
        config: ResendVerificationConfig,
    ) -> Self {
        Self {
            user_repository,
            code_generator,
            code_store,
            email_notifier,
            audit_repository,
            config,
        }
    }

    pub fn config(&self) -> &ResendVerificationConfig {
        &self.config
    }

    /// Resend the email verification code for `command.user_id`
    ///
    /// 1. Looks up the user; a miss or a lookup error is `UserNotFound`
    /// 2. Returns `AlreadyVerified` without side effects for verified emails
    /// 3. Rejects inactive accounts
    /// 4. Generates a code and stores it under `(user_id, "email")`, replacing any previous one
    /// 5. Emails the code; on failure the stored code is kept
    /// 6. Appends an audit record, best-effort
    ///
    /// Cancellation or an elapsed deadline stops the workflow at the current
    /// step with `ResendError::Cancelled`; completed steps are not rolled back.
    pub async fn execute(
        &self,
        command: &ResendVerificationCommand,
        request: &RequestContext,
        call: &CallContext,
    ) -> Result<ResendOutcome, ResendError> {
        command.validate().map_err(|e| ResendError::InvalidInput {
            message: e.to_string(),
        })?;

        let user_id = command.user_id;
        let deadline = call
            .deadline
            .unwrap_or_else(|| deadline_after(self.config.default_deadline));

        let user = self.lookup_user(user_id, call, deadline).await?;

        if user.email_verified {
            tracing::info!(
                user_id = user_id,
                event = "email_already_verified",
                "Resend requested for an already verified email"
            );
            return Ok(ResendOutcome::already_verified());
        }

        if !user.is_active() {
            tracing::warn!(
                user_id = user_id,
                status = %user.status,
                event = "resend_rejected_inactive",
                "Resend requested for an inactive account"
            );
            return Err(ResendError::AccountInactive);
        }

        let issued = self.issue_code(&user, call, deadline)?;
        self.persist_code(&issued, call, deadline).await?;
        self.dispatch_code(&user, &issued, call, deadline).await?;
        self.record_audit(&user, request).await;

        tracing::info!(
            user_id = user_id,
            email = %mask_email(&user.email),
            event = "verification_code_resent",
            "Verification code resent"
        );

        Ok(ResendOutcome::code_sent())
    }

    async fn lookup_user(
        &self,
        user_id: i64,
        call: &CallContext,
        deadline: Instant,
    ) -> Result<User, ResendError> {
        let found = guarded(
            call,
            deadline,
            WorkflowStage::Lookup,
            self.user_repository.find_by_id(user_id),
        )
        .await?;

        match found {
            Ok(Some(user)) => Ok(user),
            Ok(None) => {
                tracing::info!(user_id = user_id, event = "user_not_found", "User not found");
                Err(ResendError::UserNotFound)
            }
            Err(e) => {
                tracing::error!(
                    user_id = user_id,
                    error = %e,
                    event = "user_lookup_failed",
                    "Error finding user for resend verification"
                );
                Err(ResendError::UserNotFound)
            }
        }
    }

    fn issue_code(
        &self,
        user: &User,
        call: &CallContext,
        deadline: Instant,
    ) -> Result<IssuedCode, ResendError> {
        if call.is_expired(deadline) {
            return Err(cancelled(WorkflowStage::Generate));
        }

        let code = self.code_generator.generate().map_err(|e| {
            tracing::error!(
                user_id = user.id,
                error = %e,
                event = "code_generation_failed",
                "Error generating verification code"
            );
            ResendError::InternalFault {
                stage: WorkflowStage::Generate,
                source: e,
            }
        })?;

        Ok(IssuedCode::new(CodeKey::email(user.id), code, self.config.code_ttl))
    }

    async fn persist_code(
        &self,
        issued: &IssuedCode,
        call: &CallContext,
        deadline: Instant,
    ) -> Result<(), ResendError> {
        guarded(
            call,
            deadline,
            WorkflowStage::Persist,
            self.code_store
                .put(&issued.key, issued.code(), self.config.code_ttl),
        )
        .await?
        .map_err(|e| {
            tracing::error!(
                user_id = issued.key.user_id,
                key = %issued.key,
                error = %e,
                event = "code_storage_failed",
                "Error storing verification code"
            );
            ResendError::InternalFault {
                stage: WorkflowStage::Persist,
                source: e,
            }
        })?;

        tracing::debug!(
            user_id = issued.key.user_id,
            key = %issued.key,
            expires_at = %issued.expires_at,
            "Stored verification code"
        );
        Ok(())
    }

    async fn dispatch_code(
        &self,
        user: &User,
        issued: &IssuedCode,
        call: &CallContext,
        deadline: Instant,
    ) -> Result<(), ResendError> {
        guarded(
            call,
            deadline,
            WorkflowStage::Dispatch,
            self.email_notifier
                .send_verification_email(&user.email, issued.code()),
        )
        .await?
        .map_err(|e| {
            tracing::error!(
                user_id = user.id,
                email = %mask_email(&user.email),
                error = %e,
                event = "verification_email_failed",
                "Error sending verification email"
            );
            ResendError::DeliveryFailed { source: e }
        })
    }

    /// Append the audit record, bounded by the audit budget
    ///
    /// Failures and timeouts are logged and swallowed. The caller's
    /// cancellation token is not observed here: the workflow already succeeded.
    async fn record_audit(&self, user: &User, request: &RequestContext) {
        let audit_log = AuditLog::new(actions::EMAIL_VERIFICATION_RESENT)
            .with_user(user.id)
            .with_description("Verification code resent")
            .with_request(
                request.ip_address.clone(),
                request.user_agent.clone(),
                self.config.audit_route.clone(),
                self.config.audit_method.clone(),
                SUCCESS_STATUS,
            );

        match tokio::time::timeout(
            self.config.audit_timeout,
            self.audit_repository.create(&audit_log),
        )
        .await
        {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::warn!(
                    user_id = user.id,
                    error = %e,
                    event = "audit_log_failed",
                    "Error creating audit log"
                );
            }
            Err(_) => {
                tracing::warn!(
                    user_id = user.id,
                    timeout_ms = self.config.audit_timeout.as_millis() as u64,
                    event = "audit_log_timeout",
                    "Audit log append timed out"
                );
            }
        }
    }
}

/// Run `step` unless the call is cancelled or the deadline passes first
///
/// Cancellation is checked before the step is polled, so a step whose
/// context already fired is never started.
async fn guarded<F, T>(
    call: &CallContext,
    deadline: Instant,
    stage: WorkflowStage,
    step: F,
) -> Result<T, ResendError>
where
    F: Future<Output = T>,
{
    tokio::select! {
        biased;
        _ = call.cancel.cancelled() => Err(cancelled(stage)),
        _ = tokio::time::sleep_until(deadline) => Err(cancelled(stage)),
        output = step => Ok(output),
    }
}

fn cancelled(stage: WorkflowStage) -> ResendError {
    tracing::warn!(event = "resend_cancelled", stage = %stage, "Resend request cancelled");
    ResendError::Cancelled { stage }
}
