use serde::{Deserialize, Serialize};

/// Opaque session payload issued by the admin login endpoint. The client
/// persists it verbatim and never looks inside; only the backend interprets
/// its contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminSession(pub serde_json::Value);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_round_trips_verbatim() {
        let payload = json!({ "token": "abc123", "username": "admin", "nested": { "role": "super" } });
        let session = AdminSession(payload.clone());
        let serialized = serde_json::to_string(&session).unwrap();
        let restored: AdminSession = serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored.0, payload);
    }
}
