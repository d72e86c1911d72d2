//! Global Application State
//!
//! Reactive state management using Leptos signals.

use estate_admin::config::AppConfig;
use estate_admin::session::BootstrapOutcome;
use leptos::*;

const EMBEDDED_CONFIG: &str = include_str!("../../estate.toml");

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// How the session bootstrap ended, once it has
    pub session: RwSignal<Option<BootstrapOutcome>>,
    /// A save is in flight
    pub saving: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Configuration compiled into the bundle, defaults on a parse error
pub fn load_config() -> AppConfig {
    match AppConfig::from_toml_str(EMBEDDED_CONFIG, "estate.toml") {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; using defaults", e);
            AppConfig::default()
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        session: create_rw_signal(None),
        saving: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Footer text for the session bootstrap
    pub fn session_label(&self) -> &'static str {
        self.session.with(|outcome| session_label(outcome.as_ref()))
    }
}

fn session_label(outcome: Option<&BootstrapOutcome>) -> &'static str {
    match outcome {
        None => "Connecting...",
        Some(BootstrapOutcome::Established) => "Session ready",
        Some(BootstrapOutcome::Failed(_)) => "No session",
        Some(BootstrapOutcome::Cancelled) | Some(BootstrapOutcome::Skipped) => "Idle",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = AppConfig::from_toml_str(EMBEDDED_CONFIG, "estate.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_session_label() {
        assert_eq!(session_label(None), "Connecting...");
        assert_eq!(session_label(Some(&BootstrapOutcome::Established)), "Session ready");
        assert_eq!(
            session_label(Some(&BootstrapOutcome::Failed("419".into()))),
            "No session"
        );
    }
}
