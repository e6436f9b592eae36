/// Body of a diagnosis service's `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ServiceHealth {
    pub status: String,
    pub model_loaded: bool,
    /// Which engine answers `/diagnose`. Older services omit it.
    #[serde(default)]
    pub engine: String,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
