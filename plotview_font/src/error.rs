// Copyright 2025 the Plotview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Error returned by a single layout call or by option parsing.
///
/// None of these leave partial output behind: a failed layout returns no
/// polylines at all.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The text contains a character the active glyph table does not cover.
    #[error("unknown character {ch:?} (U+{code:04X})")]
    UnknownCharacter {
        /// The offending character.
        ch: char,
        /// Its Unicode scalar value.
        code: u32,
    },
    /// An option key that [`crate::LayoutOptions::set`] does not recognize.
    #[error("unknown layout option `{0}`")]
    UnknownOption(String),
    /// A value outside the valid set (or range) for its option.
    #[error("invalid value `{value}` for layout option `{key}`")]
    InvalidValue {
        /// Canonical option name.
        key: &'static str,
        /// The rejected value, as given.
        value: String,
    },
}

impl LayoutError {
    pub(crate) fn unknown_character(ch: char) -> Self {
        Self::UnknownCharacter {
            ch,
            code: u32::from(ch),
        }
    }

    pub(crate) fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
        }
    }
}
