//! `users.get` response types.

use serde::Deserialize;

/// Envelope returned by the `users.get` method.
#[derive(Debug, Clone, Deserialize)]
pub struct UsersGetResponse {
    /// May be empty, e.g. for a deactivated or invalid user id.
    #[serde(default)]
    pub response: Vec<UserRecord>,
}

/// One user record from `users.get`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn response_decodes_records() {
        let json = r#"{"response": [{"id": 1, "first_name": "Иван", "last_name": "Петров"}]}"#;
        let parsed: UsersGetResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.response.len(), 1);
        assert_eq!(parsed.response[0].first_name, "Иван");
        assert_eq!(parsed.response[0].last_name, "Петров");
    }

    #[test]
    fn empty_response_list_decodes() {
        let parsed: UsersGetResponse = serde_json::from_str(r#"{"response": []}"#).unwrap();
        assert!(parsed.response.is_empty());
    }

    #[test]
    fn missing_response_field_decodes_to_empty() {
        let parsed: UsersGetResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.response.is_empty());
    }
}
