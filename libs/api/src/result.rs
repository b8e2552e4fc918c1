use serde_json::Value;

/// Outcome of one facade call.
///
/// Exactly one variant is populated per call. Non-success HTTP statuses and
/// transport or parse faults all collapse into [`ApiResult::Failure`]; the
/// message alone does not distinguish the two kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResult {
    /// The backend answered with a success status and a JSON body.
    Success(Value),
    /// The call failed before a usable body was obtained.
    Failure(String),
}

impl ApiResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    /// The response body, if the call succeeded.
    pub fn data(&self) -> Option<&Value> {
        match self {
            ApiResult::Success(data) => Some(data),
            ApiResult::Failure(_) => None,
        }
    }

    /// The failure message, if the call failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::Failure(message) => Some(message),
        }
    }

    /// Convert into a plain `Result` for `?`-style handling.
    pub fn into_result(self) -> Result<Value, String> {
        match self {
            ApiResult::Success(data) => Ok(data),
            ApiResult::Failure(message) => Err(message),
        }
    }
}
