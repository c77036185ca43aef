pub mod args;
pub mod cli;
pub mod error;
pub mod model;
pub mod recommend;
pub mod storage;
pub mod controller {
    pub mod catalog;
    pub mod conditions;
    pub mod http_handlers;
    pub mod request;
}
pub mod view {
    pub mod index;
    pub mod recommendation;
    pub mod weather;
}

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub use error::CaddieError;
pub use recommend::{adjust_for_conditions, compute_recommendation, select_club};
