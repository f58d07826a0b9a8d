// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::Weekday;
use serde::de;

use crate::CalendarError;

/// The weekday treated as the first day of a displayed week.
///
/// NOTE: This is unrelated to the weekend test, which is always Saturday and Sunday.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks start on Sunday (0).
    #[cfg_attr(feature = "clap", clap(name = "sunday", alias = "sun", alias = "0"))]
    Sunday = 0,

    /// Weeks start on Monday (1).
    #[default]
    #[cfg_attr(feature = "clap", clap(name = "monday", alias = "mon", alias = "1"))]
    Monday = 1,
}

impl WeekStart {
    /// The weekday number, 0 for Sunday and 1 for Monday.
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// The first weekday of the week.
    pub const fn weekday(self) -> Weekday {
        match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(WeekStart::Sunday),
            1 => Ok(WeekStart::Monday),
            _ => Err(CalendarError::InvalidWeekStart(value.to_string())),
        }
    }
}

impl FromStr for WeekStart {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "sun" | "sunday" => Ok(WeekStart::Sunday),
            "1" | "mon" | "monday" => Ok(WeekStart::Monday),
            _ => Err(CalendarError::InvalidWeekStart(s.to_string())),
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => write!(f, "sunday"),
            WeekStart::Monday => write!(f, "monday"),
        }
    }
}

impl<'de> serde::Deserialize<'de> for WeekStart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct WeekStartVisitor;

        impl de::Visitor<'_> for WeekStartVisitor {
            type Value = WeekStart;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"0, 1, "sunday" or "monday""#)
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u8::try_from(value)
                    .map_err(|_| CalendarError::InvalidWeekStart(value.to_string()))
                    .and_then(WeekStart::try_from)
                    .map_err(de::Error::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match u64::try_from(value) {
                    Ok(v) => self.visit_u64(v),
                    Err(_) => Err(de::Error::custom(CalendarError::InvalidWeekStart(
                        value.to_string(),
                    ))),
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(WeekStartVisitor)
    }
}
