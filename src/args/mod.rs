use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::time::Duration;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, CleanCommand, ClubEdit, Command};

/// Parse and validate the command line, exiting with a usage error on bad input.
#[must_use]
pub fn args_checks() -> CleanArgs {
    let args = Args::parse();
    if let Err(msg) = args.validate() {
        Args::command().error(ErrorKind::ValueValidation, msg).exit();
    }
    match CleanArgs::new(args) {
        Ok(clean) => clean,
        Err(msg) => Args::command().error(ErrorKind::ValueValidation, msg).exit(),
    }
}

impl CleanArgs {
    /// # Errors
    ///
    /// Will return `Err` if the explicit conditions are invalid
    pub fn new(args: Args) -> Result<Self, String> {
        let command = match args.command {
            Command::Serve { bind } => CleanCommand::Serve { bind },
            Command::Clubs => CleanCommand::Clubs,
            Command::Set { edits } => CleanCommand::Set { edits },
            Command::Recommend {
                target,
                wind_speed,
                wind_direction,
                temperature,
            } => CleanCommand::Recommend {
                target,
                conditions: validation::explicit_conditions(
                    wind_speed,
                    wind_direction,
                    temperature,
                )?,
            },
        };
        Ok(CleanArgs {
            db_name: args.db_name,
            weather_delay: Duration::from_millis(args.weather_delay_ms),
            weather_timeout: Duration::from_millis(args.weather_timeout_ms),
            fixed_weather: args.fixed_weather,
            command,
        })
    }
}
