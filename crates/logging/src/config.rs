//! crates/logging/src/config.rs
//! Verbosity configuration combining info and debug levels.

use super::levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};

/// Combined verbosity configuration for info and debug flags.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level (the `-v` count).
    ///
    /// Each level includes everything enabled by the levels below it.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        if level >= 1 {
            config.info.skip = 1;
            config.info.stats = 1;
        }
        if level >= 2 {
            config.info.walk = 1;
            config.info.remove = 1;
            config.info.misc = 1;
            config.debug.walk = 1;
        }
        if level >= 3 {
            config.info.skip = 2;
            config.info.stats = 2;
            config.info.remove = 2;
            config.debug.walk = 2;
            config.debug.frame = 1;
            config.debug.fs = 1;
        }
        if level >= 4 {
            config.debug.frame = 2;
            config.debug.classify = 1;
            config.debug.fs = 2;
        }
        if level >= 5 {
            config.info.misc = 2;
            config.debug.set_all(3);
        }

        config
    }

    /// Apply a single info flag token (e.g., "skip2", "walk").
    pub fn apply_info_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        let flag = InfoFlag::ALL
            .into_iter()
            .find(|flag| flag.name() == name)
            .ok_or_else(|| format!("unknown info flag: {name}"))?;

        self.info.set(flag, level);
        Ok(())
    }

    /// Apply a single debug flag token (e.g., "frame2", "fs").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        let flag = DebugFlag::ALL
            .into_iter()
            .find(|flag| flag.name() == name)
            .ok_or_else(|| format!("unknown debug flag: {name}"))?;

        self.debug.set(flag, level);
        Ok(())
    }

    /// Apply a comma separated `--info` value such as `"walk,skip2"`.
    ///
    /// `ALL` sets every info flag to 1 and `NONE` clears them all.
    pub fn apply_info_flags(&mut self, flags: &str) -> Result<(), String> {
        for token in flags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if token.eq_ignore_ascii_case("ALL") {
                self.info.set_all(1);
            } else if token.eq_ignore_ascii_case("NONE") {
                self.info.set_all(0);
            } else {
                self.apply_info_flag(token)?;
            }
        }
        Ok(())
    }

    /// Apply a comma separated `--debug` value such as `"frame2,fs"`.
    ///
    /// `ALL` sets every debug flag to 1 and `NONE` clears them all.
    pub fn apply_debug_flags(&mut self, flags: &str) -> Result<(), String> {
        for token in flags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if token.eq_ignore_ascii_case("ALL") {
                self.debug.set_all(1);
            } else if token.eq_ignore_ascii_case("NONE") {
                self.debug.set_all(0);
            } else {
                self.apply_debug_flag(token)?;
            }
        }
        Ok(())
    }
}

/// Parse a flag token like "skip2" into ("skip", 2) or "walk" into ("walk", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let (name, level_str) = token.split_at(pos);
            let level = level_str
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        // No digits, default to level 1
        None => Ok((token, 1)),
    }
}
