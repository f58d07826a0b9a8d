// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::NaiveDateTime;
use colored::Colorize;
use meetcal_core::{CalendarEvent, CalendarView, DayBuckets, ViewMode, day_key};

use crate::util::{OutputFormat, format_span, format_time_span, summary_of, truncate_to_width};

/// Events listed per day in the month view before collapsing the rest.
const MONTH_MAX_EVENTS: usize = 3;

const MONTH_SUMMARY_WIDTH: usize = 32;

#[derive(Debug)]
pub struct CalendarFormatter {
    now: NaiveDateTime,
    format: OutputFormat,
}

impl CalendarFormatter {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(
        &'a self,
        view: &'a CalendarView,
        buckets: &'a DayBuckets<&'a CalendarEvent>,
    ) -> Display<'a> {
        Display {
            formatter: self,
            view,
            buckets,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    formatter: &'a CalendarFormatter,
    view: &'a CalendarView,
    buckets: &'a DayBuckets<&'a CalendarEvent>,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = match self.formatter.format {
            OutputFormat::Json => return self.fmt_json(f),
            OutputFormat::Table => match self.view.view() {
                ViewMode::Day => self.day_lines(),
                ViewMode::Week => self.week_lines(),
                ViewMode::Month => self.month_lines(),
            },
        };
        write!(f, "{}", lines.join("\n"))
    }
}

#[derive(serde::Serialize)]
struct ViewJson<'a> {
    view: ViewMode,
    from: NaiveDateTime,
    to: NaiveDateTime,
    days: Vec<String>,
    events: &'a DayBuckets<&'a CalendarEvent>,
}

impl Display<'_> {
    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.view.range();
        let json = ViewJson {
            view: self.view.view(),
            from: range.from(),
            to: range.to(),
            days: self.view.days().iter().map(|d| day_key(d.date())).collect(),
            events: self.buckets,
        };
        let s = serde_json::to_string_pretty(&json).map_err(|_| fmt::Error)?;
        write!(f, "{s}")
    }

    fn day_lines(&self) -> Vec<String> {
        let Some(day) = self.view.days().first() else {
            return vec![];
        };

        let mut lines = vec![self.title(day, "%A, %-d %B %Y")];
        let events = self.buckets.for_day(day);
        if events.is_empty() {
            lines.push("No events today".dimmed().to_string());
        }

        for event in events {
            lines.push(String::new());
            lines.push(format_span(*event).dimmed().to_string());
            lines.push(summary_of(*event).bold().to_string());
            if let Some(location) = &event.location {
                lines.push(location.clone());
            }
            if let Some(link) = &event.html_link {
                lines.push(link.underline().to_string());
            }
            if let Some(description) = &event.description {
                lines.extend(description.lines().map(|l| format!("  {l}")));
            }
        }
        lines
    }

    fn week_lines(&self) -> Vec<String> {
        let mut lines = vec![self.header("Week")];
        for day in self.view.days() {
            lines.push(String::new());
            lines.push(self.title(day, "%a %-d %b"));

            let events = self.buckets.for_day(day);
            if events.is_empty() {
                lines.push(format!("  {}", "No events".dimmed()));
            }
            for event in events {
                let span = format_time_span(*event);
                lines.push(format!("  {:<11} {}", span, summary_of(*event)));
            }
        }
        lines
    }

    fn month_lines(&self) -> Vec<String> {
        let mut lines = vec![self.header("Month")];
        for row in self.view.rows() {
            lines.push(String::new());
            for day in row {
                lines.push(self.title(day, "%a %-d %b"));

                let events = self.buckets.for_day(day);
                if events.is_empty() {
                    lines.push(format!("  {}", "No events".dimmed()));
                }
                for event in events.iter().take(MONTH_MAX_EVENTS) {
                    let summary = truncate_to_width(summary_of(*event), MONTH_SUMMARY_WIDTH);
                    lines.push(format!("  {summary}"));
                }
                if events.len() > MONTH_MAX_EVENTS {
                    let more = format!("+{} more…", events.len() - MONTH_MAX_EVENTS);
                    lines.push(format!("  {}", more.dimmed()));
                }
            }
        }
        lines
    }

    fn header(&self, title: &str) -> String {
        format!("🗓️ {} {}", title.bold(), self.view.range())
    }

    fn title(&self, day: &NaiveDateTime, fmt: &str) -> String {
        let title = day.format(fmt).to_string();
        match day.date() == self.formatter.now.date() {
            true => title.green().bold().to_string(),
            false => title.bold().to_string(),
        }
    }
}
