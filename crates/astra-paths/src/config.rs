/// Construction-time settings for an [`AStarState`](crate::AStarState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrontierConfig {
    /// Number of waypoints to reserve room for up front.
    pub initial_capacity: usize,
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 256,
        }
    }
}
