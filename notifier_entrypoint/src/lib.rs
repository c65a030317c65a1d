#![deny(missing_docs)]
//! Shared initialization for the notifier lambda binaries: `.env` loading, the panic hook and
//! the tracing subscriber matching the [Environment] the lambda runs in.

use notifier_env::Environment;
use tracing_subscriber::EnvFilter;

/// How log lines are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// human readable multi-line output with colours, for running on localhost
    Pretty,
    /// one json object per line with the event fields flattened, for cloudwatch
    Json,
}

impl From<Environment> for LogFormat {
    fn from(env: Environment) -> Self {
        match env {
            Environment::Local => LogFormat::Pretty,
            Environment::Production | Environment::Develop => LogFormat::Json,
        }
    }
}

/// Describes how a lambda binary should be initialized
#[derive(Debug)]
pub struct NotifierEntrypoint {
    env: Environment,
}

impl Default for NotifierEntrypoint {
    fn default() -> Self {
        Self::new(Environment::new_or_prod())
    }
}

/// proof that [NotifierEntrypoint::init] was called
#[derive(Debug)]
pub struct InitializedEntrypoint(Environment);

impl InitializedEntrypoint {
    /// the [Environment] this binary was initialized for
    pub fn environment(&self) -> Environment {
        self.0
    }
}

impl NotifierEntrypoint {
    /// initialize for the input [Environment] rather than reading it from the env vars
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// the [LogFormat] that [Self::init] installs
    pub fn log_format(&self) -> LogFormat {
        self.env.into()
    }

    /// consume self, install the global subscriber and panic hook.
    /// This must only be called once per process
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_file(true)
            .with_line_number(true);

        match self.log_format() {
            LogFormat::Pretty => builder.with_ansi(true).pretty().init(),
            LogFormat::Json => builder
                .with_ansi(false)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init(),
        }

        InitializedEntrypoint(self.env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_logs_pretty() {
        assert_eq!(
            NotifierEntrypoint::new(Environment::Local).log_format(),
            LogFormat::Pretty
        );
    }

    #[test]
    fn deployed_environments_log_json() {
        for env in [Environment::Production, Environment::Develop] {
            assert_eq!(NotifierEntrypoint::new(env).log_format(), LogFormat::Json);
        }
    }
}
