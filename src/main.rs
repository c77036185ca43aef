use rusty_caddie::args::{self, CleanArgs, CleanCommand};
use rusty_caddie::cli;
use rusty_caddie::controller::conditions::{ConditionsProvider, FixedConditions, SimulatedWeather};
use rusty_caddie::controller::http_handlers::{self, AppState};
use rusty_caddie::model::Conditions;
use rusty_caddie::storage::{SqliteStorage, Storage};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = args::args_checks();
    let storage: Arc<dyn Storage> = Arc::new(
        SqliteStorage::open(&args.db_name)
            .with_context(|| format!("open database {}", args.db_name))?,
    );
    let provider = conditions_provider(&args);

    let mut stdout = std::io::stdout();
    match &args.command {
        CleanCommand::Serve { bind } => serve(storage, provider, &args, bind).await?,
        CleanCommand::Clubs => cli::run_clubs(storage.as_ref(), &mut stdout).await?,
        CleanCommand::Set { edits } => {
            cli::run_set(storage.as_ref(), edits, &mut stdout).await?;
        }
        CleanCommand::Recommend { target, conditions } => {
            cli::run_recommend(
                storage.as_ref(),
                provider.as_ref(),
                args.weather_timeout,
                *target,
                *conditions,
                &mut stdout,
            )
            .await?;
        }
    }
    Ok(())
}

fn conditions_provider(args: &CleanArgs) -> Arc<dyn ConditionsProvider> {
    if args.fixed_weather {
        Arc::new(FixedConditions(Conditions::FALLBACK))
    } else {
        Arc::new(SimulatedWeather::new(args.weather_delay))
    }
}

async fn serve(
    storage: Arc<dyn Storage>,
    provider: Arc<dyn ConditionsProvider>,
    args: &CleanArgs,
    bind: &str,
) -> Result<()> {
    let state = Data::new(AppState::new(storage, provider, args.weather_timeout));
    info!(%bind, db = %args.db_name, "starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(http_handlers::index))
            .route("/clubs", web::post().to(http_handlers::save_clubs))
            .route("/recommend", web::get().to(http_handlers::recommend))
            .route("/conditions", web::get().to(http_handlers::conditions))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static"))
    })
    .bind(bind)
    .with_context(|| format!("bind {bind}"))?
    .run()
    .await?;
    Ok(())
}
