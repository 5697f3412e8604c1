//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the verbosity flag system.
//!
//! [`TreewalkLayer`] is a tracing-subscriber layer that maps tracing events
//! onto info and debug flags by target, so the standard tracing macros
//! (`trace!`, `debug!`, `info!`, ...) respect `--info`/`--debug` settings and
//! land in the same thread-local event buffer as [`crate::info_log!`] and
//! [`crate::debug_log!`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{VerbosityConfig, init_tracing};
//!
//! init_tracing(VerbosityConfig::from_verbose_level(3));
//! tracing::debug!(target: "treewalk::frame", "opened frame");
//! ```

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use super::thread_local::{debug_gte, emit_debug, emit_info, info_gte};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// A tracing layer that routes events into the verbosity flag system.
#[derive(Debug, Default)]
pub struct TreewalkLayer {
    _private: (),
}

impl TreewalkLayer {
    /// Creates the layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Map a tracing target to a debug flag.
    fn target_to_debug_flag(target: &str) -> Option<DebugFlag> {
        DebugFlag::ALL
            .into_iter()
            .find(|flag| target_matches(target, flag.name()))
    }

    /// Map a tracing target to an info flag.
    fn target_to_info_flag(target: &str) -> Option<InfoFlag> {
        InfoFlag::ALL
            .into_iter()
            .find(|flag| target_matches(target, flag.name()))
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> u8 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }
}

/// Matches `treewalk::<name>`, any `::<name>` suffix, or the bare name.
///
/// Suffix matching avoids false positives such as `platform` matching `fs`.
fn target_matches(target: &str, name: &str) -> bool {
    target == name
        || target
            .rsplit_once("::")
            .is_some_and(|(_, last)| last == name)
}

impl<S> Layer<S> for TreewalkLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        let verbosity_level = Self::level_to_verbosity_level(metadata.level());

        // Debug flags are more specific, so they win when both match
        if metadata.level() >= &Level::DEBUG {
            if let Some(flag) = Self::target_to_debug_flag(target) {
                if debug_gte(flag, verbosity_level) {
                    if let Some(message) = extract_message(event) {
                        emit_debug(flag, verbosity_level, message);
                    }
                }
                return;
            }
        }

        if let Some(flag) = Self::target_to_info_flag(target) {
            if info_gte(flag, verbosity_level) {
                if let Some(message) = extract_message(event) {
                    emit_info(flag, verbosity_level, message);
                }
            }
        }
    }
}

fn extract_message(event: &tracing::Event<'_>) -> Option<String> {
    let mut visitor = MessageVisitor::default();
    event.record(&mut visitor);
    visitor.message
}

/// Visitor to extract message from tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Initialize tracing with the given verbosity configuration.
///
/// Installs a global subscriber made of [`TreewalkLayer`] and also stores the
/// configuration for the current thread.
pub fn init_tracing(config: VerbosityConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    super::thread_local::init(config);

    // A second initialisation (for example from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(TreewalkLayer::new())
        .try_init();
}
