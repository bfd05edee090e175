use actix_web::HttpResponse;
use serde::Serialize;

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub fields: serde_json::Value,
}

impl ErrorResponse {
    pub fn message(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            fields: serde_json::json!({ "message": message.into() }),
        }
    }
}

fn bad_request(error_response: ErrorResponse) -> actix_web::Error {
    actix_web::error::InternalError::from_response("", HttpResponse::BadRequest().json(error_response))
        .into()
}

/// Map an extractor failure to a 400 with per-field messages
fn validation_error(err: actix_web_validator::Error) -> actix_web::Error {
    let mut fields = serde_json::Map::new();

    match err {
        actix_web_validator::Error::Validate(validation_errors) => {
            for (field, errors) in validation_errors.field_errors() {
                let messages: Vec<String> = errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Invalid value for {}", field))
                    })
                    .collect();
                fields.insert(field.to_string(), serde_json::json!({ "errors": messages }));
            }

            bad_request(ErrorResponse {
                error: "Missing or invalid fields".to_string(),
                fields: serde_json::Value::Object(fields),
            })
        }
        actix_web_validator::Error::Deserialize(de_err) => {
            let err_string = de_err.to_string();

            let message = if err_string.contains("EOF while parsing") {
                "Request body is empty. Expected JSON payload"
            } else if err_string.contains("unknown variant") {
                "Invalid enum value. Check allowed values for this field"
            } else if err_string.contains("missing field") {
                "A required field is missing"
            } else if err_string.contains("invalid digit") {
                "Invalid number in query string"
            } else {
                "Invalid JSON format"
            };
            fields.insert("message".to_string(), serde_json::json!(message));
            fields.insert("detail".to_string(), serde_json::json!(err_string));

            bad_request(ErrorResponse {
                error: "Request validation failed".to_string(),
                fields: serde_json::Value::Object(fields),
            })
        }
        _ => {
            fields.insert("message".to_string(), serde_json::json!("Validation error"));

            bad_request(ErrorResponse {
                error: "Request validation failed".to_string(),
                fields: serde_json::Value::Object(fields),
            })
        }
    }
}

/// JSON extractor config shared by every route: validation failures and
/// malformed bodies become 400s with per-field messages
pub fn json_config(limit: usize) -> actix_web_validator::JsonConfig {
    actix_web_validator::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| validation_error(err))
}

/// Query-string counterpart of [`json_config`]
pub fn query_config() -> actix_web_validator::QueryConfig {
    actix_web_validator::QueryConfig::default().error_handler(|err, _req| validation_error(err))
}
