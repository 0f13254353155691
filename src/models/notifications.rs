//! Notification, session, and maintenance models.

use serde::{Deserialize, Serialize};

/// One console notification.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct NotificationData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `notification` or `webhook_tx`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<String>,
    /// `pending`, `error`, or `success`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Originating user or `system`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Millisecond UNIX timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_display: Option<i64>,
}

/// Response of `listNotifications`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GetNotificationsResponse {
    /// Total number of notifications in the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Number returned in this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returning: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<NotificationData>>,
}

/// Request body for `archiveNotifications`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ArchiveNotificationsBody {
    pub notification_ids: Vec<String>,
}

/// Response of `archiveNotifications`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ArchiveResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// e.g. `archived 3 notification(s)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Response of `deleteAllNotifications`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DeleteAllNotificationsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// e.g. `deleted 101 notification(s)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Response of `deleteSigTx`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DeleteSignatureCollectionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The transaction id of the deleted signature collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_id: Option<String>,
}

/// Response of `deleteAllSessions`.
///
/// Session deletion is eventually consistent; the server acknowledges the
/// request before the cached sessions expire.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DeleteAllSessionsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of `restart`.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RestartResponse {
    /// e.g. `restarting - give me 5-30 seconds`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
