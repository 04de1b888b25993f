use serde::{Deserialize, Serialize};

/// Response type for the counter read endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CountResponse {
    pub count: i64,
}
