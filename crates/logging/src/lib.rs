#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` implements the info/debug verbosity system shared by the
//! `treewalk` workspace. Diagnostics are grouped into categories
//! ([`InfoFlag`], [`DebugFlag`]), each with its own numeric level, in the
//! style of rsync's `--info=FLAG[N]` and `--debug=FLAG[N]` options.
//!
//! # Design
//!
//! - [`VerbosityConfig`] holds the per-flag levels. It is built from a `-v`
//!   count with [`VerbosityConfig::from_verbose_level`] and refined with
//!   comma separated flag lists.
//! - [`init`] stores the configuration for the current thread. The
//!   [`info_log!`] and [`debug_log!`] macros check the stored level and, when
//!   enabled, record a [`DiagnosticEvent`].
//! - Front-ends call [`drain_events`] to collect and print the recorded
//!   events wherever they see fit.
//! - With the `tracing` feature, `TreewalkLayer` routes events emitted
//!   through the `tracing` macros into the same buffer.
//!
//! # Examples
//!
//! ```
//! use logging::{VerbosityConfig, debug_log, drain_events, init};
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_debug_flags("frame2").unwrap();
//! init(config);
//!
//! debug_log!(Frame, 1, "opened {}", "/srv");
//! debug_log!(Walk, 1, "suppressed");
//!
//! let events = drain_events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].to_string(), "[debug:frame] opened /srv");
//! ```

mod config;
mod levels;
mod macros;
mod thread_local;

#[cfg(feature = "tracing")]
mod tracing_bridge;
#[cfg(feature = "tracing")]
mod tracing_macros;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use thread_local::{
    DiagnosticEvent, current_config, debug_gte, drain_events, emit_debug, emit_info, info_gte,
    init,
};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{TreewalkLayer, init_tracing};
