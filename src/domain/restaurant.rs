use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Restaurant owning one or more admin users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    #[schema(example = "rest-1")]
    pub id: String,
    #[schema(example = "The Golden Spoon")]
    pub name: String,
    #[schema(example = "123 Main Street, Downtown")]
    pub location: String,
}

impl Restaurant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
        }
    }
}
