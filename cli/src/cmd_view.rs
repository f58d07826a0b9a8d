// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use chrono::{Local, NaiveDateTime};
use clap::{Arg, ArgMatches, Command, ValueHint, arg, value_parser};
use meetcal_core::{
    CalendarView, Config, DateTimeAnchor, EventSource, ViewMode, WeekStart, shift_anchor,
};

use crate::calendar_formatter::CalendarFormatter;
use crate::source::JsonFileSource;
use crate::util::OutputFormat;

/// Show the events of a day, week or month.
#[derive(Debug, Default, Clone)]
pub struct CmdView {
    /// The view to show, the configured default when unset.
    pub view: Option<ViewMode>,
    pub anchor: Option<String>,
    pub offset: i64,
    pub week_start: Option<WeekStart>,
    pub workdays_only: Option<bool>,
    pub events: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl CmdView {
    pub const VIEWS: [ViewMode; 3] = [ViewMode::Day, ViewMode::Week, ViewMode::Month];

    pub fn command(view: ViewMode) -> Command {
        let (alias, about) = match view {
            ViewMode::Day => ("d", "Show the events of a single day"),
            ViewMode::Week => ("w", "Show the events of a week"),
            ViewMode::Month => ("m", "Show the events of a month"),
        };
        Command::new(view.to_string()).alias(alias).about(about)
    }

    /// The view options, global so they may come before or after the view subcommand.
    pub fn args() -> Vec<Arg> {
        let args = [
            arg!(-a --anchor <ANCHOR> "The day to show around")
                .long_help(
                    "\
The day to show around: today, tomorrow, yesterday, YYYY-MM-DD, \"YYYY-MM-DD HH:MM\", \
\"in 3 days\" or \"2 weeks ago\". Defaults to today.",
                ),
            arg!(-n --offset <N> "Move this many views forward, or backward when negative")
                .value_parser(value_parser!(i64))
                .allow_negative_numbers(true),
            arg!(--"week-start" <DAY> "The first day of the week")
                .value_parser(value_parser!(WeekStart)),
            arg!(--"workdays-only" "Hide Saturdays and Sundays").conflicts_with("all-days"),
            arg!(--"all-days" "Show Saturdays and Sundays"),
            arg!(-e --events <FILE> "Path to a JSON file of events")
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
            OutputFormat::arg(),
        ];
        args.into_iter().map(|arg| arg.global(true)).collect()
    }

    pub fn from(matches: &ArgMatches, view: Option<ViewMode>) -> Self {
        let workdays_only = if matches.get_flag("workdays-only") {
            Some(true)
        } else if matches.get_flag("all-days") {
            Some(false)
        } else {
            None
        };

        Self {
            view,
            anchor: matches.get_one::<String>("anchor").cloned(),
            offset: matches.get_one::<i64>("offset").copied().unwrap_or(0),
            week_start: matches.get_one::<WeekStart>("week-start").copied(),
            workdays_only,
            events: matches.get_one::<PathBuf>("events").cloned(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub async fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing calendar view...");
        let now = Local::now().naive_local();
        let view = self.calendar_view(config, &now)?;

        let events = match self.events.as_ref().or(config.events_path.as_ref()) {
            Some(path) => {
                let source = JsonFileSource::new(path);
                source.list_events(&view.query_window(&Local)).await?
            }
            None => {
                tracing::debug!("no events file configured");
                Vec::new()
            }
        };

        let buckets = view.buckets(&events);
        let formatter = CalendarFormatter::new(now).with_output_format(self.output_format);
        println!("{}", formatter.format(&view, &buckets));
        Ok(())
    }

    /// Builds the view, with command-line options taking precedence over the configuration.
    pub fn calendar_view(
        &self,
        config: &Config,
        now: &NaiveDateTime,
    ) -> Result<CalendarView, Box<dyn Error>> {
        let anchor = match &self.anchor {
            Some(anchor) => anchor.parse::<DateTimeAnchor>()?,
            None => DateTimeAnchor::default(),
        };
        let view = self.view.unwrap_or(config.default_view);
        let anchor = shift_anchor(&anchor.resolve(now), view, self.offset);

        let mut options = config.view_options();
        if let Some(week_start) = self.week_start {
            options.week_start = week_start;
        }
        if let Some(workdays_only) = self.workdays_only {
            options.workdays_only = workdays_only;
        }
        Ok(CalendarView::new(anchor, view, options))
    }
}
