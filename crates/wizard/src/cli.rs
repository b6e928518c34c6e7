// src/cli.rs
use clap::{Parser, Subcommand, ValueEnum};
use stepform::TextField;

#[derive(Parser)]
#[command(name = "wizard", version, about = "Multi-step contact form in the terminal")]
pub struct Cli {
    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT")]
    pub tick_rate: Option<f64>,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT")]
    pub frame_rate: Option<f64>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Default)]
pub enum Cmd {
    /// Run interactive TUI (default)
    #[default]
    Run,
    /// Validate a single value and print the message (scripts)
    Check {
        #[arg(value_enum)]
        field: CheckField,
        value: String,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CheckField {
    Name,
    Email,
    Phone,
}

impl From<CheckField> for TextField {
    fn from(field: CheckField) -> Self {
        match field {
            CheckField::Name => TextField::Name,
            CheckField::Email => TextField::Email,
            CheckField::Phone => TextField::Phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_is_the_default() {
        let cli = Cli::try_parse_from(["wizard"]).expect("parse");
        assert!(matches!(cli.cmd.unwrap_or_default(), Cmd::Run));
    }

    #[test]
    fn check_takes_field_and_value() {
        let cli = Cli::try_parse_from(["wizard", "check", "phone", "12345"]).expect("parse");
        let Some(Cmd::Check { field, value }) = cli.cmd else {
            panic!("expected check");
        };
        assert_eq!(field, CheckField::Phone);
        assert_eq!(TextField::from(field), TextField::Phone);
        assert_eq!(value, "12345");
    }

    #[test]
    fn company_is_not_checkable() {
        assert!(Cli::try_parse_from(["wizard", "check", "company", "x"]).is_err());
    }
}
