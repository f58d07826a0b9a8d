// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of meetcal.

mod calendar_formatter;
mod cli;
mod cmd_generate_completion;
mod cmd_view;
mod config;
mod source;
mod util;

pub use crate::calendar_formatter::CalendarFormatter;
pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::cmd_view::CmdView;
pub use crate::config::parse_config;
pub use crate::source::JsonFileSource;
pub use crate::util::OutputFormat;
