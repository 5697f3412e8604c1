//! Integration tests for --info and --debug flag list parsing.

use logging::{DebugFlag, InfoFlag, VerbosityConfig, debug_gte, info_gte, init};

/// Verifies a parsed configuration is honoured once installed.
#[test]
fn parsed_flags_apply_after_init() {
    let mut config = VerbosityConfig::default();
    config.apply_info_flags("walk2,stats").expect("info flags");
    config.apply_debug_flags("classify3").expect("debug flags");
    init(config);

    assert!(info_gte(InfoFlag::Walk, 2));
    assert!(info_gte(InfoFlag::Stats, 1));
    assert!(!info_gte(InfoFlag::Skip, 1));
    assert!(debug_gte(DebugFlag::Classify, 3));
    assert!(!debug_gte(DebugFlag::Frame, 1));
}

/// Verifies flag lists refine a -v base configuration.
#[test]
fn flags_override_verbose_level() {
    let mut config = VerbosityConfig::from_verbose_level(3);
    config.apply_info_flags("skip0").expect("info flags");
    config.apply_debug_flags("NONE,fs4").expect("debug flags");

    assert_eq!(config.info.skip, 0);
    assert_eq!(config.info.stats, 2);
    assert_eq!(config.debug.walk, 0);
    assert_eq!(config.debug.fs, 4);
}

/// Verifies unknown names produce descriptive errors.
#[test]
fn unknown_flags_are_rejected() {
    let mut config = VerbosityConfig::default();
    let error = config.apply_info_flags("walk,progress").expect_err("unknown flag");
    assert_eq!(error, "unknown info flag: progress");

    let error = config.apply_debug_flag("frame-1").expect_err("bad name");
    assert_eq!(error, "unknown debug flag: frame-");
}

#[cfg(feature = "serde")]
#[test]
fn config_serializes_to_json() {
    let config = VerbosityConfig::from_verbose_level(2);
    let json = serde_json::to_string(&config).expect("serialize");
    let restored: VerbosityConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, config);
}
