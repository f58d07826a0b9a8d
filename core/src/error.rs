// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised at the boundary of the calendar engine.
///
/// The range arithmetic itself is total and never fails; these errors only come from
/// parsing user input or from an upstream event source.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// Week start outside of 0 (Sunday) and 1 (Monday).
    #[error("invalid week start `{0}`, expected 0 (sunday) or 1 (monday)")]
    InvalidWeekStart(String),

    /// Unknown view mode.
    #[error("invalid view mode `{0}`, expected one of: day, week, month")]
    InvalidViewMode(String),

    /// Anchor that could not be parsed.
    #[error("invalid anchor `{0}`")]
    InvalidAnchor(String),

    /// The upstream event source failed.
    #[error("event source error: {0}")]
    Source(String),
}
