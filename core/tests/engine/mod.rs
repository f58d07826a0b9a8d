// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Tests of the calendar engine through its public API.
//!
//! Properties are checked over a spread of anchors, and the worked boundary scenarios
//! are checked one by one.

mod bucketing;
mod properties;
mod scenarios;
mod source;
