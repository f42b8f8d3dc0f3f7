use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    /// Anything the backend sends that we do not know about.
    #[serde(other)]
    Unknown,
}

/// Leave application as returned by `GET /leave/...` on the HRM backend.
///
/// `from`/`to` stay raw strings here; a bad date only drops the record from
/// aggregation instead of failing the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
    "leaveType": "Sick",
    "reason": "Flu",
    "from": "2024-01-08",
    "to": "2024-01-09",
    "status": "Approved"
}))]
pub struct LeaveRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(rename = "leaveType", alias = "leave_type", default)]
    pub leave_type: String,

    #[serde(default)]
    pub reason: String,

    #[schema(example = "2024-01-08")]
    pub from: String,

    #[schema(example = "2024-01-09")]
    pub to: String,

    pub status: LeaveStatus,
}

impl LeaveRecord {
    pub fn is_approved(&self) -> bool {
        self.status == LeaveStatus::Approved
    }
}
