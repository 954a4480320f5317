use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Health service shared by every API front end.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Reports the service as healthy.
    ///
    /// Answering at all is the health signal; no store round trip is made.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Notes API is alive".into(),
        }
    }
}
