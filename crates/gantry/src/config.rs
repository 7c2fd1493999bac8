//! Configuration for a roadmap session.

/// Configuration for a [`Roadmap`](crate::Roadmap) session.
#[derive(Debug, Clone)]
pub struct RoadmapConfig {
    /// Prefix for generated entry IDs (e.g. "roadmap", "myproduct").
    pub id_prefix: String,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            id_prefix: "roadmap".to_string(),
        }
    }
}

impl RoadmapConfig {
    /// Configuration with a custom entry ID prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: prefix.into(),
        }
    }
}
