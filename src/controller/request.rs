use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::CaddieError;
use crate::model::TargetDistance;

#[derive(Debug, Clone, Copy)]
pub struct RecommendRequest {
    pub target: TargetDistance,
    pub want_json: bool,
}

/// Parse query parameters into a recommendation request.
///
/// # Errors
/// Returns `InvalidTargetDistance` if `target` is missing, not a number or below 1.
pub fn parse_recommend_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
) -> Result<RecommendRequest, CaddieError> {
    let target = query
        .get("target")
        .map_or("", String::as_str)
        .parse::<TargetDistance>()?;
    Ok(RecommendRequest {
        target,
        want_json: wants_json(query),
    })
}

pub fn wants_json<S: BuildHasher>(query: &HashMap<String, String, S>) -> bool {
    match query.get("json").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    }
}
