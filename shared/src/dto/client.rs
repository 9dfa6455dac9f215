use serde::{Deserialize, Serialize};

/// Bank client (customer) record.
///
/// Credits reference their owner by `clientId`; the client record itself
/// carries no credit data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Client {
    /// Display name, `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_omits_id() {
        let client = Client {
            id: None,
            first_name: "Nadia".to_string(),
            last_name: "Bennani".to_string(),
            email: "nadia@example.com".to_string(),
            phone: None,
            address: None,
        };
        let json = serde_json::to_string(&client).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"firstName\":\"Nadia\""));
        assert_eq!(client.full_name(), "Nadia Bennani");
    }
}
