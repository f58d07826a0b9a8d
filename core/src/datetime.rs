// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod anchor;
mod loose;
mod util;

pub use anchor::DateTimeAnchor;
pub use loose::LooseDateTime;
pub use util::{
    STABLE_FORMAT_DATEONLY, add_days, end_of_day, end_of_month, end_of_week,
    from_local_datetime, start_of_day, start_of_month, start_of_week,
};
pub(crate) use util::{shift_months, start_of_day_naive};
