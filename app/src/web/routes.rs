//! REST endpoint handlers.

use std::fmt::Display;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use crate::state::AppState;
use caddie::{
    ArcRequest, ArcResponse, BagError, BagResponse, CaddieConfig, DispersionPolygon,
    DispersionRequest, DistanceShotRequest, ErrorResponse, GenerateBagRequest, LayupPlan,
    PlanRequest, PredictRequest, PredictResponse, RecommendRequest, RecommendResponse, ShotContext,
    ShotPlan, StatusResponse, StrategyResponse, arc_points, club_call, ellipse_points,
    generate_bag, landing_zone, layup_plan, plan_shot, strategy_recommendation, wind_adjusted_shot,
};

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn error(status: StatusCode, msg: impl Display) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
}

/// Unwrap a JSON body. Malformed bodies and out-of-range coordinates are
/// both a 400.
fn body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!("rejected request body: {}", rejection.body_text());
            Err(error(StatusCode::BAD_REQUEST, rejection.body_text()))
        }
    }
}

/// GET /api/status
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let requests = state.request_count();
    Json(state.system.read(|c| StatusResponse {
        requests,
        clubs: c.bag.len(),
        handicap: c.handicap,
        units: c.default_units,
    }))
}

/// GET /api/settings
///
/// Returns the full persisted config.
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<CaddieConfig> {
    Json(state.system.snapshot())
}

/// POST /api/settings
///
/// Replaces the persisted config wholesale.
pub async fn post_settings(
    State(state): State<Arc<AppState>>,
    req: Result<Json<CaddieConfig>, JsonRejection>,
) -> ApiResult<CaddieConfig> {
    let new_config = body(req)?;
    tracing::info!(
        "settings replaced ({} clubs, {} courses)",
        new_config.bag.len(),
        new_config.course.len()
    );
    state.system.replace(new_config);
    Ok(Json(state.system.snapshot()))
}

/// GET /api/bag
pub async fn get_bag(State(state): State<Arc<AppState>>) -> Json<BagResponse> {
    Json(state.system.read(|c| BagResponse {
        handicap: c.handicap,
        clubs: c.bag.clone(),
    }))
}

/// POST /api/bag/generate
///
/// Builds a bag for the given handicap. With `save`, the generated bag
/// replaces the configured one.
pub async fn post_generate_bag(
    State(state): State<Arc<AppState>>,
    req: Result<Json<GenerateBagRequest>, JsonRejection>,
) -> ApiResult<BagResponse> {
    let req = body(req)?;
    if !req.handicap.is_finite() {
        return Err(error(StatusCode::BAD_REQUEST, "handicap must be a number"));
    }
    let clubs = generate_bag(req.handicap);
    if req.save {
        tracing::info!("saving generated bag for handicap {}", req.handicap);
        let saved = clubs.clone();
        state.system.update(|c| {
            c.handicap = Some(req.handicap);
            c.bag = saved;
        });
    }
    Ok(Json(BagResponse {
        handicap: Some(req.handicap),
        clubs,
    }))
}

/// POST /api/predict
pub async fn post_predict(
    State(state): State<Arc<AppState>>,
    req: Result<Json<PredictRequest>, JsonRejection>,
) -> ApiResult<PredictResponse> {
    let req = body(req)?;
    let (default_wind, units) = state
        .system
        .read(|c| (c.wind.to_vector(), c.default_units));
    let wind = req.wind.unwrap_or(default_wind);

    let prediction = wind_adjusted_shot(req.start, req.carry, req.bearing, wind);
    Ok(Json(PredictResponse {
        prediction,
        plays_like_display: units.format_meters(prediction.plays_like_clamped()),
    }))
}

/// POST /api/dispersion
pub async fn post_dispersion(
    State(state): State<Arc<AppState>>,
    req: Result<Json<DispersionRequest>, JsonRejection>,
) -> ApiResult<DispersionPolygon> {
    match body(req)? {
        DispersionRequest::Club {
            center,
            club_id,
            bearing,
        } => state.system.read(|c| match c.bag.get(club_id) {
            Some(club) => Ok(Json(landing_zone(center, club, bearing))),
            None => Err(error(StatusCode::NOT_FOUND, BagError::UnknownClub(club_id))),
        }),
        DispersionRequest::Ellipse {
            center,
            width,
            height,
            rotation,
        } => Ok(Json(ellipse_points(center, width, height, rotation))),
    }
}

/// POST /api/arc
pub async fn post_arc(req: Result<Json<ArcRequest>, JsonRejection>) -> ApiResult<ArcResponse> {
    let req = body(req)?;
    let arc = arc_points(req.start, req.end);
    Ok(Json(ArcResponse {
        control: arc.control,
        points: arc.iter().collect(),
    }))
}

/// POST /api/recommend
pub async fn post_recommend(
    State(state): State<Arc<AppState>>,
    req: Result<Json<RecommendRequest>, JsonRejection>,
) -> ApiResult<RecommendResponse> {
    let req = body(req)?;
    let resp = state.system.read(|c| {
        let call = club_call(req.distance, &c.bag);
        RecommendResponse {
            label: call.to_string(),
            club: call.club().cloned(),
        }
    });
    Ok(Json(resp))
}

/// POST /api/layup
///
/// `null` when no pair of clubs reaches.
pub async fn post_layup(
    State(state): State<Arc<AppState>>,
    req: Result<Json<DistanceShotRequest>, JsonRejection>,
) -> ApiResult<Option<LayupPlan>> {
    let req = body(req)?;
    let plan = state
        .system
        .read(|c| layup_plan(req.distance, &c.bag, req.shot_number));
    Ok(Json(plan))
}

/// POST /api/strategy
pub async fn post_strategy(
    State(state): State<Arc<AppState>>,
    req: Result<Json<DistanceShotRequest>, JsonRejection>,
) -> ApiResult<StrategyResponse> {
    let req = body(req)?;
    let rec = state
        .system
        .read(|c| strategy_recommendation(req.distance, &c.bag, req.shot_number));
    Ok(Json(rec.into()))
}

/// POST /api/plan
pub async fn post_plan(
    State(state): State<Arc<AppState>>,
    req: Result<Json<PlanRequest>, JsonRejection>,
) -> ApiResult<ShotPlan> {
    let req = body(req)?;
    let plan = state.system.read(|c| {
        let ctx = ShotContext {
            position: req.position,
            target: req.target,
            wind: req.wind.unwrap_or_else(|| c.wind.to_vector()),
            shot_number: req.shot_number,
        };
        plan_shot(&ctx, &c.bag)
    });
    tracing::debug!(
        "planned shot {}: {:.0}m, {}",
        req.shot_number,
        plan.distance_to_target,
        plan.club_label
    );
    Ok(Json(plan))
}
