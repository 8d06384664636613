use std::path::PathBuf;

use clap::Parser;

use crate::app::Screen;
use crate::task_store::{parse_date_format, DEFAULT_DATE_FORMAT};

#[derive(Debug, Parser)]
#[command(name = "tasklist")]
#[command(version)]
#[command(about = "Terminal task list: echo, list, modal and editor screens")]
pub struct Cli {
    /// Screen shown at startup (Tab switches screens)
    #[arg(short, long, value_enum, default_value_t = Screen::Editor)]
    pub screen: Screen,

    /// chrono format used for a task's creation date
    #[arg(long, default_value = DEFAULT_DATE_FORMAT, value_parser = parse_date_format)]
    pub date_format: String,

    /// Write logs to this file (nothing is logged otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the session's tasks as JSON after the UI exits
    #[arg(long)]
    pub dump_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tasklist"]).unwrap();
        assert_eq!(cli.screen, Screen::Editor);
        assert_eq!(cli.date_format, "%Y-%m-%d");
        assert!(cli.log_file.is_none());
        assert_eq!(cli.log_level, "info");
        assert!(!cli.dump_json);
    }

    #[test]
    fn test_screen_flag() {
        let cli = Cli::try_parse_from(["tasklist", "--screen", "modal", "--dump-json"]).unwrap();
        assert_eq!(cli.screen, Screen::Modal);
        assert!(cli.dump_json);

        assert!(Cli::try_parse_from(["tasklist", "--screen", "kanban"]).is_err());
    }

    #[test]
    fn test_date_format_flag() {
        let cli = Cli::try_parse_from(["tasklist", "--date-format", "%d.%m.%Y"]).unwrap();
        assert_eq!(cli.date_format, "%d.%m.%Y");

        assert!(Cli::try_parse_from(["tasklist", "--date-format", "%Q"]).is_err());
    }
}
