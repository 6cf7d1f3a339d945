use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "duration-picker")]
#[command(about = "Terminal duration picker: days, hours and minutes with spinner controls")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the picker and print the chosen duration on exit
    Run(RunArgs),
    /// Print config path and create default file if missing
    ConfigPath,
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Initial value in total minutes
    #[arg(long)]
    pub minutes: Option<u32>,
    /// Upper bound for the days field
    #[arg(long)]
    pub max_days: Option<u32>,
    /// Hours per day before hours carry into days
    #[arg(long)]
    pub max_hours: Option<u32>,
    /// Label shown under the days field
    #[arg(long)]
    pub days_label: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_overrides() {
        let cli = Cli::try_parse_from([
            "duration-picker",
            "run",
            "--minutes",
            "90",
            "--max-days",
            "7",
            "--days-label",
            "DAGAR",
            "--json",
        ])
        .unwrap();

        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert_eq!(args.minutes, Some(90));
        assert_eq!(args.max_days, Some(7));
        assert_eq!(args.max_hours, None);
        assert_eq!(args.days_label.as_deref(), Some("DAGAR"));
        assert!(args.json);
    }

    #[test]
    fn parses_config_path() {
        let cli = Cli::try_parse_from(["duration-picker", "config-path"]).unwrap();
        assert!(matches!(cli.command, Commands::ConfigPath));
    }
}
