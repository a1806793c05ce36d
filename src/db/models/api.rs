use serde::Serialize;

// Uniform JSON envelope for every endpoint
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: Some(data),
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn created(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 201,
            message: message.to_string(),
            data: Some(data),
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: u16, message: &str, errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            code,
            message: message.to_string(),
            data: None,
            errors: Some(errors),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error_with_code(code: u16, message: &str, error_code: &str) -> Self {
        Self::error(
            code,
            message,
            vec![ErrorDetail {
                field: None,
                code: error_code.to_string(),
                message: message.to_string(),
            }],
        )
    }

    pub fn validation_error(errors: Vec<ErrorDetail>) -> Self {
        Self::error(400, "Validation failed", errors)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::error_with_code(400, message, "BAD_REQUEST")
    }

    pub fn unauthorized(message: &str) -> Self {
        Self::error_with_code(401, message, "UNAUTHORIZED")
    }

    pub fn not_found(message: &str) -> Self {
        Self::error_with_code(404, message, "NOT_FOUND")
    }

    pub fn conflict(message: &str, field: Option<String>, code: &str) -> Self {
        Self::error(
            409,
            message,
            vec![ErrorDetail {
                field,
                code: code.to_string(),
                message: message.to_string(),
            }],
        )
    }

    pub fn internal_error(message: &str) -> Self {
        Self::error_with_code(500, message, "INTERNAL_ERROR")
    }
}
