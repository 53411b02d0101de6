use serde::Serialize;

/// Envelope for directory endpoints:
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Service found"
/// }
/// ```
///
/// Check endpoints do not use it; they return a bare `CheckResult` so every
/// caller sees the same shape.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    pub data: T,
    pub message: String,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: message.into(),
        }
    }

    /// An error response; `data` carries `T::default()`.
    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self {
            success: false,
            data: T::default(),
            message: message.into(),
        }
    }
}
