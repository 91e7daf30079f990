//! Reflow settings and their defaults
//!
//! Settings are plain data threaded through every call. Nothing here reads
//! a configuration store; hosts hand in whatever raw key/value source they
//! have and get back a fully defaulted [`Settings`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

pub const DEFAULT_PREFERRED_LINE_LENGTH: i64 = 80;

/// Options controlling a reflow.
///
/// Serialized with the camelCase keys hosts use in their configuration
/// (`preferredLineLength`, `wrapLongLinks`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Target width in characters. A word only stays on a line if the line
    /// still fits with the space that would follow it, so produced lines are
    /// at most `preferred_line_length - 1` characters. Not validated: zero
    /// or a negative value puts every word on its own line.
    pub preferred_line_length: i64,
    /// Put two spaces after `.`, `!` or `?` when a capitalised word follows.
    pub double_space_between_sentences: bool,
    /// Regenerate setext underlines to the length of the heading text.
    pub resize_header_dash_lines: bool,
    /// When false, bare URLs stay on the current line even if they overflow.
    pub wrap_long_links: bool,
    /// Whether hosts should reflow the whole document on save.
    pub format_on_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preferred_line_length: DEFAULT_PREFERRED_LINE_LENGTH,
            double_space_between_sentences: false,
            resize_header_dash_lines: true,
            wrap_long_links: true,
            format_on_save: false,
        }
    }
}

impl Settings {
    /// Layer `overrides` on top of these settings; unset keys keep their
    /// current value.
    #[must_use]
    pub fn apply(self, overrides: &SettingsOverrides) -> Self {
        Self {
            preferred_line_length: overrides
                .preferred_line_length
                .unwrap_or(self.preferred_line_length),
            double_space_between_sentences: overrides
                .double_space_between_sentences
                .unwrap_or(self.double_space_between_sentences),
            resize_header_dash_lines: overrides
                .resize_header_dash_lines
                .unwrap_or(self.resize_header_dash_lines),
            wrap_long_links: overrides.wrap_long_links.unwrap_or(self.wrap_long_links),
            format_on_save: overrides.format_on_save.unwrap_or(self.format_on_save),
        }
    }
}

/// Any subset of [`Settings`], as read from a configuration source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_line_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_space_between_sentences: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_header_dash_lines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_long_links: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_on_save: Option<bool>,
}

impl SettingsOverrides {
    /// Merge two layers; keys set in `other` win.
    #[must_use]
    pub fn merge(self, other: &Self) -> Self {
        Self {
            preferred_line_length: other.preferred_line_length.or(self.preferred_line_length),
            double_space_between_sentences: other
                .double_space_between_sentences
                .or(self.double_space_between_sentences),
            resize_header_dash_lines: other
                .resize_header_dash_lines
                .or(self.resize_header_dash_lines),
            wrap_long_links: other.wrap_long_links.or(self.wrap_long_links),
            format_on_save: other.format_on_save.or(self.format_on_save),
        }
    }
}

/// Resolve settings from an optional raw key/value source.
///
/// Unspecified keys take their defaults and unknown keys are ignored. A key
/// holding the wrong type is an [`Error::InvalidSettings`].
pub fn get_settings(raw: Option<&Value>) -> Result<Settings> {
    let overrides = match raw {
        None | Some(Value::Null) => SettingsOverrides::default(),
        Some(value) => SettingsOverrides::deserialize(value)
            .map_err(|e| Error::settings(e.to_string()))?,
    };
    Ok(Settings::default().apply(&overrides))
}
