use serde_json::Value;
use shared::CropRecommendationRequest;

use crate::errors::ApiError;

pub const REQUIRED_FIELDS: [&str; 9] = [
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
    "ph_category",
    "rainfall_level",
];

/// Checks presence first so the client learns which field is missing, then
/// decodes the typed request.
pub fn parse_crop_request(body: Value) -> Result<CropRecommendationRequest, ApiError> {
    let object = body
        .as_object()
        .ok_or_else(|| ApiError::InvalidRequest("Request body must be a JSON object".to_string()))?;

    if let Some(missing) = REQUIRED_FIELDS
        .iter()
        .find(|field| !object.contains_key(**field))
    {
        return Err(ApiError::InvalidRequest(format!(
            "Missing required field: {}",
            missing
        )));
    }

    serde_json::from_value(body)
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid crop recommendation request: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> Value {
        json!({
            "N": 90, "P": 42, "K": 43,
            "temperature": 20.87, "humidity": 82.0, "ph": 6.5, "rainfall": 202.93,
            "ph_category": "Acidic", "rainfall_level": "High"
        })
    }

    #[test]
    fn accepts_complete_request() {
        let request = parse_crop_request(complete()).expect("valid");
        assert_eq!(request.n, 90.0);
        assert_eq!(request.rainfall_level, "High");
    }

    #[test]
    fn names_first_missing_field() {
        let mut body = complete();
        body.as_object_mut().unwrap().remove("humidity");
        body.as_object_mut().unwrap().remove("ph_category");
        match parse_crop_request(body) {
            Err(ApiError::InvalidRequest(message)) => {
                assert_eq!(message, "Missing required field: humidity")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn rejects_wrong_types_and_non_objects() {
        let mut body = complete();
        body["ph_category"] = json!(3);
        assert!(matches!(parse_crop_request(body), Err(ApiError::InvalidRequest(_))));
        assert!(matches!(parse_crop_request(json!([1, 2])), Err(ApiError::InvalidRequest(_))));
    }
}
