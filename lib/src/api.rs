//! REST API request/response types shared between the app and its clients.

use serde::{Deserialize, Serialize};

use crate::{
    Bag, ClubId, ClubProfile, GeoPoint, ShotPrediction, StrategyAction, StrategyRecommendation,
    UnitSystem, WindVector,
};

/// GET /api/status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub requests: u64,
    pub clubs: usize,
    #[serde(default)]
    pub handicap: Option<f64>,
    pub units: UnitSystem,
}

/// Error body for 4xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// POST /api/predict request body. Missing wind falls back to the configured
/// default.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PredictRequest {
    pub start: GeoPoint,
    pub carry: f64,
    pub bearing: f64,
    #[serde(default)]
    pub wind: Option<WindVector>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(flatten)]
    pub prediction: ShotPrediction,
    /// Clamped plays-like distance in the configured units, e.g. `"164yd"`.
    pub plays_like_display: String,
}

/// POST /api/dispersion request body: either a club from the bag flown on a
/// bearing, or a raw ellipse.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DispersionRequest {
    Club {
        center: GeoPoint,
        club_id: ClubId,
        bearing: f64,
    },
    Ellipse {
        center: GeoPoint,
        width: f64,
        height: f64,
        #[serde(default)]
        rotation: f64,
    },
}

/// POST /api/arc request body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArcRequest {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcResponse {
    pub control: GeoPoint,
    pub points: Vec<GeoPoint>,
}

/// POST /api/recommend request body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecommendRequest {
    pub distance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// "Putter" inside 20 m, otherwise the club name.
    pub label: String,
    #[serde(default)]
    pub club: Option<ClubProfile>,
}

/// POST /api/layup and /api/strategy request body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DistanceShotRequest {
    pub distance: f64,
    #[serde(default = "first_shot")]
    pub shot_number: u32,
}

fn first_shot() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyResponse {
    pub action: StrategyAction,
    pub main_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_action: Option<String>,
}

impl From<StrategyRecommendation> for StrategyResponse {
    fn from(rec: StrategyRecommendation) -> Self {
        Self {
            action: rec.action,
            main_action: rec.main_action().to_string(),
            sub_action: rec.sub_action,
        }
    }
}

/// POST /api/bag/generate request body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateBagRequest {
    pub handicap: f64,
    /// Replace the configured bag with the generated one.
    #[serde(default)]
    pub save: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagResponse {
    #[serde(default)]
    pub handicap: Option<f64>,
    pub clubs: Bag,
}

/// POST /api/plan request body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlanRequest {
    pub position: GeoPoint,
    pub target: GeoPoint,
    #[serde(default)]
    pub wind: Option<WindVector>,
    #[serde(default = "first_shot")]
    pub shot_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispersion_request_variants() {
        let club: DispersionRequest = serde_json::from_str(
            r#"{"center": {"lat": 10.0, "lon": 20.0}, "club_id": 3, "bearing": 45.0}"#,
        )
        .unwrap();
        match club {
            DispersionRequest::Club { club_id, .. } => assert_eq!(club_id, ClubId(3)),
            other => panic!("expected a club request, got {other:?}"),
        }

        let raw: DispersionRequest = serde_json::from_str(
            r#"{"center": {"lat": 10.0, "lon": 20.0}, "width": 30.0, "height": 12.0}"#,
        )
        .unwrap();
        match raw {
            DispersionRequest::Ellipse { rotation, .. } => assert_eq!(rotation, 0.0),
            other => panic!("expected an ellipse request, got {other:?}"),
        }
    }

    #[test]
    fn test_shot_number_defaults_to_first() {
        let req: DistanceShotRequest = serde_json::from_str(r#"{"distance": 140.0}"#).unwrap();
        assert_eq!(req.shot_number, 1);
    }
}
