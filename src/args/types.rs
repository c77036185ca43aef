use clap::{Parser, Subcommand};
use std::time::Duration;

use crate::model::{CompassPoint, Conditions, TargetDistance};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// SQLite file holding the saved club distances.
    #[arg(
        short = 'n',
        long,
        value_name = "DATABASE_NAME",
        default_value = "caddie.db",
        global = true
    )]
    pub db_name: String,
    /// How long the simulated weather takes to arrive.
    #[arg(long, value_name = "MILLISECONDS", default_value_t = 1500, global = true)]
    pub weather_delay_ms: u64,
    /// Give up on the weather provider after this long and use the default conditions.
    #[arg(long, value_name = "MILLISECONDS", default_value_t = 5000, global = true)]
    pub weather_timeout_ms: u64,
    /// Skip the simulation and always use 7 mph W, 68°F.
    #[arg(long, global = true)]
    pub fixed_weather: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the web app.
    Serve {
        #[arg(short = 'b', long, value_name = "ADDR", default_value = "0.0.0.0:5201")]
        bind: String,
    },
    /// Print the club catalog with saved distances.
    Clubs,
    /// Save carry distances, e.g. `set 7iron=155 pw=118`.
    Set {
        #[arg(
            required = true,
            value_name = "ID=YARDS",
            value_parser = crate::args::validation::check_club_edit
        )]
        edits: Vec<ClubEdit>,
    },
    /// Recommend a club for a target distance.
    Recommend {
        #[arg(value_name = "YARDS", value_parser = crate::args::validation::check_target_distance)]
        target: TargetDistance,
        /// Wind speed in mph; with no readings given the weather provider is asked.
        #[arg(long, value_name = "MPH")]
        wind_speed: Option<f64>,
        #[arg(long, value_name = "DIRECTION", value_parser = crate::args::validation::check_compass_point)]
        wind_direction: Option<CompassPoint>,
        /// Temperature in °F.
        #[arg(long, value_name = "FAHRENHEIT", allow_hyphen_values = true)]
        temperature: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubEdit {
    pub id: String,
    pub yards: u32,
}

#[derive(Debug, Clone)]
pub enum CleanCommand {
    Serve { bind: String },
    Clubs,
    Set { edits: Vec<ClubEdit> },
    Recommend {
        target: TargetDistance,
        conditions: Option<Conditions>,
    },
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub weather_delay: Duration,
    pub weather_timeout: Duration,
    pub fixed_weather: bool,
    pub command: CleanCommand,
}
