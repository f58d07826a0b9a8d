// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use meetcal_core::{Event, EventTime, LooseDateTime};
use unicode_width::UnicodeWidthChar;

/// The output format for commands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format, table by default")
            .value_parser(value_parser!(OutputFormat))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// The title of an event, as shown in any view.
pub fn summary_of(event: &impl Event) -> &str {
    match event.summary() {
        Some(s) if !s.trim().is_empty() => s,
        _ => "(no title)",
    }
}

/// Formats the time span of an event within its day, e.g. `09:00–09:30`.
pub fn format_time_span(event: &impl Event) -> String {
    let start = event.start().and_then(EventTime::parse);
    let end = event.end().and_then(EventTime::parse);
    match (start.and_then(|a| a.time()), end.and_then(|a| a.time())) {
        (Some(stime), Some(etime)) => {
            format!("{}–{}", stime.format("%H:%M"), etime.format("%H:%M"))
        }
        (Some(stime), None) => stime.format("%H:%M").to_string(),
        (None, _) if start.is_some() => "all day".to_string(),
        (None, _) => String::new(),
    }
}

/// Formats the full span of an event, with dates.
pub fn format_span(event: &impl Event) -> String {
    let start = event.start().and_then(EventTime::parse);
    let end = event.end().and_then(EventTime::parse);
    match (start, end) {
        (Some(start), Some(end)) if start.date() == end.date() => match end.time() {
            Some(etime) => format!("{} – {}", format_datetime(start), etime.format("%H:%M")),
            None => format_datetime(start),
        },
        (Some(start), Some(end)) => {
            format!("{} – {}", format_datetime(start), format_datetime(end))
        }
        (Some(start), None) => format_datetime(start),
        (None, Some(end)) => format!("– {}", format_datetime(end)),
        (None, None) => String::new(),
    }
}

pub fn format_datetime(t: LooseDateTime) -> String {
    match t {
        LooseDateTime::DateOnly(d) => d.format("%Y-%m-%d"),
        LooseDateTime::Floating(dt) => dt.format("%Y-%m-%d %H:%M"),
        LooseDateTime::Local(dt) => dt.format("%Y-%m-%d %H:%M"),
    }
    .to_string()
}

/// Truncates `s` to at most `max_width` terminal columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }

    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
