//! Scoped diagnostic logging
//!
//! Components never reach for ambient logging state: a [`Logger`] is handed
//! to each component through its constructor, and child loggers are derived
//! with [`Logger::child`] so events carry the full component path. Events are
//! emitted through `tracing`; logging is purely observational and never
//! affects control flow.

use tracing_subscriber::EnvFilter;

/// A logger scoped to one component instance
///
/// Cheap to clone; holds only the dotted component path it stamps on events.
#[derive(Debug, Clone)]
pub struct Logger {
    component: String,
}

impl Logger {
    /// Create a root logger for the given component
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    /// Derive a child logger scoped under this one
    ///
    /// `Logger::new("tubekit").child("playlists")` yields the component path
    /// `tubekit.playlists`.
    pub fn child(&self, name: impl AsRef<str>) -> Self {
        Self {
            component: format!("{}.{}", self.component, name.as_ref()),
        }
    }

    /// The dotted component path this logger stamps on events
    pub fn component(&self) -> &str {
        &self.component
    }

    /// Emit a debug-level event
    pub fn debug(&self, message: &str) {
        tracing::debug!(component = %self.component, "{message}");
    }

    /// Emit an info-level event
    pub fn info(&self, message: &str) {
        tracing::info!(component = %self.component, "{message}");
    }

    /// Emit a warn-level event
    pub fn warn(&self, message: &str) {
        tracing::warn!(component = %self.component, "{message}");
    }

    /// Emit an error-level event
    pub fn error(&self, message: &str) {
        tracing::error!(component = %self.component, "{message}");
    }
}

/// Install a `tracing` subscriber honoring `RUST_LOG`
///
/// Convenience for binaries and tests embedding this crate. Never called
/// implicitly; the library itself only emits events.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
