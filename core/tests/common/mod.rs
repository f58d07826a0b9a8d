// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test data factories for dates and events.

mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{anchors, at, date, event_all_day, event_at, event_without_start, ids};
