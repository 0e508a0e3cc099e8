//! Boundary to the external password-reset service.
//!
//! The service is remote and opaque; the host application drives the
//! calls and feeds the outcome back to the shell. The core only fixes
//! the seam, the client-side validation rules, and the user-facing
//! texts.

use thiserror::Error;

/// Successful response body from the reset endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthMessage {
    pub message: String,
}

/// Failure surfaced by the remote service.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Remote password-reset operations, as exposed by the auth backend.
pub trait AuthApi {
    fn request_password_reset(&self, email: &str) -> Result<AuthMessage, AuthError>;
    fn confirm_password_reset(
        &self,
        code: &str,
        new_password: &str,
    ) -> Result<AuthMessage, AuthError>;
}

/// Retry-prompting text shown when a reset request fails.
pub const RESET_REQUEST_FAILED: &str =
    "Ocorreu um erro ao tentar enviar o e-mail. Tente novamente.";

pub const PASSWORDS_DO_NOT_MATCH: &str = "As senhas não coincidem.";
pub const PASSWORD_TOO_SHORT: &str = "A senha deve ter no mínimo 6 caracteres.";

/// Client-side checks run before the remote confirm call.
pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), String> {
    if password != confirmation {
        return Err(PASSWORDS_DO_NOT_MATCH.to_string());
    }
    if password.chars().count() < 6 {
        return Err(PASSWORD_TOO_SHORT.to_string());
    }
    Ok(())
}

/// Maps any transport failure to the generic retry message; an external
/// failure never crashes a view.
pub fn surface_reset_failure(_error: &AuthError) -> &'static str {
    RESET_REQUEST_FAILED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_passwords() {
        let err = validate_new_password("segredo1", "segredo2").expect_err("must mismatch");
        assert_eq!(err, PASSWORDS_DO_NOT_MATCH);
    }

    #[test]
    fn rejects_short_passwords() {
        let err = validate_new_password("abc", "abc").expect_err("too short");
        assert_eq!(err, PASSWORD_TOO_SHORT);
    }

    #[test]
    fn accepts_a_valid_password() {
        assert!(validate_new_password("segredo", "segredo").is_ok());
    }

    #[test]
    fn transport_failures_surface_the_retry_text() {
        let error = AuthError::Transport("timeout".into());
        assert_eq!(surface_reset_failure(&error), RESET_REQUEST_FAILED);
    }

    struct FlakyAuth {
        healthy: bool,
    }

    impl AuthApi for FlakyAuth {
        fn request_password_reset(&self, email: &str) -> Result<AuthMessage, AuthError> {
            if self.healthy {
                Ok(AuthMessage {
                    message: format!("Link enviado para {email}."),
                })
            } else {
                Err(AuthError::Transport("connection refused".into()))
            }
        }

        fn confirm_password_reset(
            &self,
            _code: &str,
            _new_password: &str,
        ) -> Result<AuthMessage, AuthError> {
            Ok(AuthMessage {
                message: "Senha redefinida.".into(),
            })
        }
    }

    #[test]
    fn the_seam_carries_messages_and_failures() {
        let healthy = FlakyAuth { healthy: true };
        let response = healthy
            .request_password_reset("bruno.costa@example.com")
            .expect("healthy service responds");
        assert!(response.message.contains("bruno.costa@example.com"));

        let broken = FlakyAuth { healthy: false };
        let error = broken
            .request_password_reset("bruno.costa@example.com")
            .expect_err("broken transport fails");
        assert_eq!(surface_reset_failure(&error), RESET_REQUEST_FAILED);
    }
}
