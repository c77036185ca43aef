use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::catalog::{load_catalog, save_distance_edits};
use super::conditions::{ConditionsProvider, resolve_conditions};
use super::request::{parse_recommend_request, wants_json};
use crate::error::CaddieError;
use crate::model::ConditionsReport;
use crate::recommend::compute_recommendation;
use crate::storage::Storage;
use crate::view::index::{
    DEFAULT_INDEX_TITLE, IndexPage, Tab, render_calculate_button, render_index_template,
};
use crate::view::recommendation::{
    INVALID_TARGET_MESSAGE, MessageKind, SAVED_MESSAGE, render_message, render_recommendation,
};
use crate::view::weather::render_weather;

/// Shared by every worker. The conditions snapshot is replaced wholesale on refresh.
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub provider: Arc<dyn ConditionsProvider>,
    pub weather_timeout: Duration,
    pub conditions: RwLock<ConditionsReport>,
}

impl AppState {
    #[must_use]
    pub fn new(
        storage: Arc<dyn Storage>,
        provider: Arc<dyn ConditionsProvider>,
        weather_timeout: Duration,
    ) -> Self {
        Self {
            storage,
            provider,
            weather_timeout,
            conditions: RwLock::new(ConditionsReport::fallback()),
        }
    }

    async fn refresh_conditions(&self) -> ConditionsReport {
        let report = resolve_conditions(self.provider.as_ref(), self.weather_timeout).await;
        *self.conditions.write().await = report.clone();
        report
    }
}

fn html(markup: maud::Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

fn server_error(e: &CaddieError, want_json: bool) -> HttpResponse {
    error!(error = %e, "request failed");
    if want_json {
        HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
    } else {
        HttpResponse::InternalServerError()
            .content_type("text/html")
            .body(render_message(&e.to_string(), MessageKind::Error).into_string())
    }
}

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let tab = Tab::from_query(query.get("tab").map(String::as_str));
    let loaded = match load_catalog(state.storage.as_ref()).await {
        Ok(loaded) => loaded,
        Err(e) => return server_error(&e, false),
    };
    let conditions = state.conditions.read().await.clone();
    html(render_index_template(&IndexPage {
        title: DEFAULT_INDEX_TITLE,
        tab,
        catalog: &loaded.catalog,
        saved: loaded.saved,
        conditions: &conditions,
    }))
}

pub async fn save_clubs(
    form: web::Form<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let edits = form.into_inner();
    match save_distance_edits(state.storage.as_ref(), &edits).await {
        Ok(catalog) => {
            info!(clubs = catalog.len(), "saved distances from editor");
            let markup = maud::html! {
                (render_message(SAVED_MESSAGE, MessageKind::Success))
                (render_calculate_button(true, true))
            };
            html(markup)
        }
        Err(e) => server_error(&e, false),
    }
}

pub async fn recommend(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let request = match parse_recommend_request(&query) {
        Ok(request) => request,
        Err(e) => {
            return if wants_json(&query) {
                HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
            } else {
                html(maud::html! {
                    div id="recommendation" {
                        (render_message(INVALID_TARGET_MESSAGE, MessageKind::Error))
                    }
                })
            };
        }
    };

    let loaded = match load_catalog(state.storage.as_ref()).await {
        Ok(loaded) => loaded,
        Err(e) => return server_error(&e, request.want_json),
    };
    let report = state.conditions.read().await.clone();

    match compute_recommendation(request.target, &report.conditions, loaded.catalog.clubs()) {
        Ok(rec) if request.want_json => HttpResponse::Ok().json(json!({
            "recommendation": rec,
            "swing_advice": rec.swing_advice(),
            "conditions": report,
        })),
        Ok(rec) => html(render_recommendation(&rec, &report.conditions)),
        Err(e) => server_error(&e, request.want_json),
    }
}

pub async fn conditions(state: Data<AppState>) -> impl Responder {
    let report = state.refresh_conditions().await;
    html(render_weather(&report))
}
