use gloo_net::http::Request;
use serde::Deserialize;
use std::fmt;

use super::api_error::ProfileError;
use super::lenient;
use crate::stores::api_config::ApiConfig;

/// A value the backend sends either as a JSON number or as a string
///
/// Ratings and prices arrive as `4.5`, `"4.5"` or `"$20"` depending on who
/// filled the record in, so they are kept as-is and only formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    Number(f64),
    Text(String),
}

impl DisplayValue {
    /// Zero, NaN and empty strings count as "no value"
    pub fn is_blank(&self) -> bool {
        match self {
            DisplayValue::Number(n) => *n == 0.0 || n.is_nan(),
            DisplayValue::Text(s) => s.trim().is_empty(),
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Number(n) => write!(f, "{}", n),
            DisplayValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One freelancer record as returned by `GET /freelancers/:id`
///
/// Every field decodes leniently: a value of the wrong type reads as absent
/// and the rest of the record still loads.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct FreelancerProfile {
    #[serde(alias = "_id", default, deserialize_with = "lenient::identifier")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(rename = "photoUrl", default, deserialize_with = "lenient::string")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::display_value")]
    pub rating: Option<DisplayValue>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub occupation: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub languages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub work: Option<Vec<WorkItem>>,
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub reviews: Option<Vec<Review>>,
    #[serde(rename = "userId", default, deserialize_with = "lenient::identifier")]
    pub user_id: Option<String>,
}

/// A portfolio entry
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct WorkItem {
    #[serde(default, deserialize_with = "lenient::display_value")]
    pub key: Option<DisplayValue>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub project_images: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub project_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::display_value")]
    pub project_rating: Option<DisplayValue>,
    #[serde(default, deserialize_with = "lenient::display_value")]
    pub price: Option<DisplayValue>,
}

/// A client review left on the freelancer's profile
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Review {
    #[serde(default, deserialize_with = "lenient::display_value")]
    pub key: Option<DisplayValue>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub profile_image: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub msg: Option<String>,
    #[serde(default, deserialize_with = "lenient::display_value")]
    pub rating: Option<DisplayValue>,
}

/// Response wrapper used by every backend endpoint
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning the envelope's own failure flag into an error
    pub fn into_result(self) -> Result<T, ProfileError> {
        if !self.success {
            return Err(ProfileError::rejected(self.message));
        }
        self.data.ok_or(ProfileError::MissingPayload)
    }
}

/// Decode a lookup response body that came back with a 2xx status
pub fn decode_profile_body(body: &str) -> Result<FreelancerProfile, ProfileError> {
    let envelope: ApiEnvelope<FreelancerProfile> = serde_json::from_str(body)
        .map_err(|e| ProfileError::Decode(format!("Failed to parse freelancer details: {}", e)))?;
    envelope.into_result()
}

/// Map a completed HTTP exchange to a profile
///
/// The body is only inspected when the status is a success; any other
/// status is reported as not found no matter what the body says.
pub fn interpret_response(status: u16, body: &str) -> Result<FreelancerProfile, ProfileError> {
    if !(200..300).contains(&status) {
        return Err(ProfileError::NotFound { status });
    }
    decode_profile_body(body)
}

/// Fetch one freelancer by identifier
pub async fn fetch_profile(config: &ApiConfig, id: &str) -> Result<FreelancerProfile, ProfileError> {
    let url = config.freelancer_url(id);
    log::debug!("Fetching freelancer profile from {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ProfileError::Network(e.to_string()))?;

    let status = response.status();
    if !response.ok() {
        return Err(ProfileError::NotFound { status });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ProfileError::Network(e.to_string()))?;

    let profile = interpret_response(status, &body)?;
    log::debug!(
        "Decoded freelancer record {} for {}",
        profile.id.as_deref().unwrap_or("(no id)"),
        id
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BODY: &str = r#"{
        "success": true,
        "data": {
            "_id": "f-42",
            "name": "Ada Lovelace",
            "photoUrl": "/ProfileImages/ada.jpg",
            "rating": 4.9,
            "occupation": ["Developer", "Analyst"],
            "country": "United Kingdom",
            "languages": ["English", "French"],
            "bio": "I write programs for engines.",
            "skills": ["Rust", "Math"],
            "work": [
                {"key": 1, "project_images": "/work/1.png", "project_description": "Note G", "project_rating": 5, "price": 120},
                {"key": 2, "project_images": "/work/2.png", "project_description": "Tables", "project_rating": "4.5", "price": "80"}
            ],
            "reviews": [
                {"key": "r1", "name": "Charles", "profile_image": "/avatars/c.png", "msg": "Brilliant", "rating": 5}
            ],
            "userId": "u1"
        }
    }"#;

    #[test]
    fn test_decode_full_payload() {
        let profile = decode_profile_body(FULL_BODY).unwrap();
        assert_eq!(profile.id.as_deref(), Some("f-42"));
        assert_eq!(profile.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(profile.rating, Some(DisplayValue::Number(4.9)));
        assert_eq!(profile.occupation, Some(vec!["Developer".to_string(), "Analyst".to_string()]));
        assert_eq!(profile.user_id.as_deref(), Some("u1"));

        let work = profile.work.unwrap();
        assert_eq!(work.len(), 2);
        assert_eq!(work[0].project_description.as_deref(), Some("Note G"));
        assert_eq!(work[1].project_rating, Some(DisplayValue::Text("4.5".to_string())));
        assert_eq!(work[1].price, Some(DisplayValue::Text("80".to_string())));

        let reviews = profile.reviews.unwrap();
        assert_eq!(reviews[0].msg.as_deref(), Some("Brilliant"));
    }

    #[test]
    fn test_null_and_missing_collections_decode_as_none() {
        let body = r#"{"success": true, "data": {"name": "Sparse", "skills": null}}"#;
        let profile = decode_profile_body(body).unwrap();
        assert_eq!(profile.skills, None);
        assert_eq!(profile.work, None);
        assert_eq!(profile.reviews, None);
        assert_eq!(profile.photo_url, None);
    }

    #[test]
    fn test_non_success_status_never_reads_body() {
        // A body that would decode fine must still be ignored
        let err = interpret_response(404, FULL_BODY).unwrap_err();
        assert_eq!(err, ProfileError::NotFound { status: 404 });
        assert_eq!(err.to_string(), "Freelancer not found");

        // Garbage body is irrelevant for failures too
        let err = interpret_response(500, "<html>oops</html>").unwrap_err();
        assert_eq!(err.to_string(), "Freelancer not found");
    }

    #[test]
    fn test_rejected_envelope_uses_message() {
        let err = interpret_response(200, r#"{"success": false, "message": "X"}"#).unwrap_err();
        assert_eq!(err.to_string(), "X");
    }

    #[test]
    fn test_rejected_envelope_without_message() {
        let err = interpret_response(200, r#"{"success": false}"#).unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch freelancer details");
    }

    #[test]
    fn test_success_without_data() {
        let err = interpret_response(200, r#"{"success": true}"#).unwrap_err();
        assert_eq!(err, ProfileError::MissingPayload);
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = interpret_response(200, "not json").unwrap_err();
        assert!(matches!(err, ProfileError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to parse freelancer details"));
    }

    #[test]
    fn test_mistyped_fields_degrade_independently() {
        let body = r#"{"success": true, "data": {
            "name": "Ada",
            "rating": true,
            "country": ["not", "a", "string"],
            "bio": "Still here",
            "skills": ["Rust", 5, {"label": "dropped"}, null],
            "languages": "English",
            "userId": {"_id": "u1", "name": "Ada"}
        }}"#;
        let profile = decode_profile_body(body).unwrap();

        assert_eq!(profile.name.as_deref(), Some("Ada"));
        assert_eq!(profile.rating, None);
        assert_eq!(profile.country, None);
        assert_eq!(profile.bio.as_deref(), Some("Still here"));
        assert_eq!(profile.skills, Some(vec!["Rust".to_string(), "5".to_string()]));
        assert_eq!(profile.languages, None);
        assert_eq!(profile.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_malformed_list_entries_are_skipped() {
        let body = r#"{"success": true, "data": {
            "work": [
                "just a string",
                {"key": 1, "project_description": "Kept", "price": {"amount": 10}, "project_rating": false},
                {"key": 2, "project_description": "Also kept", "price": 40}
            ],
            "reviews": [42, {"name": "Bob", "msg": "Fine", "rating": "4"}]
        }}"#;
        let profile = decode_profile_body(body).unwrap();

        let work = profile.work.unwrap();
        assert_eq!(work.len(), 2);
        assert_eq!(work[0].project_description.as_deref(), Some("Kept"));
        assert_eq!(work[0].price, None);
        assert_eq!(work[0].project_rating, None);
        assert_eq!(work[1].price, Some(DisplayValue::Number(40.0)));

        let reviews = profile.reviews.unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].name.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_numeric_user_id_is_stringified() {
        let body = r#"{"success": true, "data": {"userId": 1234}}"#;
        let profile = decode_profile_body(body).unwrap();
        assert_eq!(profile.user_id.as_deref(), Some("1234"));
    }

    #[test]
    fn test_display_value_formatting() {
        assert_eq!(DisplayValue::Number(5.0).to_string(), "5");
        assert_eq!(DisplayValue::Number(4.5).to_string(), "4.5");
        assert_eq!(DisplayValue::Text("4.8".to_string()).to_string(), "4.8");

        assert!(DisplayValue::Number(0.0).is_blank());
        assert!(DisplayValue::Text(String::new()).is_blank());
        assert!(!DisplayValue::Number(3.0).is_blank());
    }
}
