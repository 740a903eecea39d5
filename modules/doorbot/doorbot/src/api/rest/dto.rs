use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/notifications`, echoed back on acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub notification: KnockDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockDto {
    pub door_id: Uuid,
    pub person_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: &'static str,
}
