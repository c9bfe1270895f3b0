//! Wire types for the DMS webhook and the VMS JSON:API
//!
//! The inbound webhook uses PascalCase field names; the VMS speaks
//! JSON:API with kebab-case attributes.

use serde::{Deserialize, Deserializer, Serialize};

/// JSON:API media type sent as both `Content-Type` and `Accept`
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Header carrying the VMS API key (`X-Auth-Token`; header names are
/// lowercase on the wire)
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// A consignment status change reported by DMS
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebhookEvent {
    /// Shipment identifier shared with VMS orders and returns
    pub consignment_reference: String,

    /// Raw provider state code (e.g. `inTransit`)
    pub consignment_state: String,
}

impl WebhookEvent {
    pub fn new(reference: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            consignment_reference: reference.into(),
            consignment_state: state.into(),
        }
    }
}

/// The two VMS resources a consignment can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Order,
    Return,
}

impl ResourceKind {
    /// Collection path relative to the VMS host
    pub fn collection_path(&self) -> &'static str {
        match self {
            ResourceKind::Order => "/api/v1/orders",
            ResourceKind::Return => "/api/v1/admin/returns",
        }
    }

    /// Attribute the lookup filters on
    pub fn filter_attribute(&self) -> &'static str {
        match self {
            ResourceKind::Order => "consignment_reference",
            ResourceKind::Return => "dms_reference",
        }
    }

    /// JSON:API resource type
    pub fn resource_type(&self) -> &'static str {
        match self {
            ResourceKind::Order => "orders",
            ResourceKind::Return => "returns",
        }
    }

    /// Lowercase label used in logs and error messages
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Order => "order",
            ResourceKind::Return => "return",
        }
    }

    /// Operation name for a failed lookup
    pub fn lookup_operation(&self) -> String {
        format!("Filtering {} by consignment reference", self.resource_type())
    }

    /// Operation name for a failed status update
    pub fn update_operation(&self) -> String {
        format!("Updating {} status", self.label())
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A record returned by a VMS filter lookup
///
/// Only the id is read; all other members are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceRef {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
}

/// Body of a VMS filter lookup (`{"data": [...]}`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterResponse {
    #[serde(default)]
    pub data: Vec<ResourceRef>,
}

impl FilterResponse {
    /// Decode a lookup body into its records, in response order
    pub fn parse(body: &str) -> crate::error::Result<Vec<ResourceRef>> {
        let found: FilterResponse = serde_json::from_str(body)?;
        Ok(found.data)
    }
}

/// JSON:API PATCH body setting only the `dms-status` attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPatch {
    pub data: StatusPatchData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPatchData {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub attributes: StatusAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusAttributes {
    #[serde(rename = "dms-status")]
    pub dms_status: String,
}

impl StatusPatch {
    /// Build the PATCH body for a resource of `kind`
    pub fn new(kind: ResourceKind, id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            data: StatusPatchData {
                id: id.into(),
                resource_type: kind.resource_type().to_string(),
                attributes: StatusAttributes {
                    dms_status: status.into(),
                },
            },
        }
    }
}

fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "resource id must be a string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_event_wire_names() {
        let event: WebhookEvent = serde_json::from_value(serde_json::json!({
            "ConsignmentReference": "EC-000-00A-K9G",
            "ConsignmentState": "inTransit"
        }))
        .unwrap();
        assert_eq!(event.consignment_reference, "EC-000-00A-K9G");
        assert_eq!(event.consignment_state, "inTransit");
    }

    #[test]
    fn test_filter_response_takes_string_and_numeric_ids() {
        let resp: FilterResponse = serde_json::from_value(serde_json::json!({
            "data": [
                {"id": "123", "type": "orders", "attributes": {"dms-status": "Delivered"}},
                {"id": 51, "type": "returns"}
            ]
        }))
        .unwrap();
        assert_eq!(resp.data[0].id, "123");
        assert_eq!(resp.data[1].id, "51");
    }

    #[test]
    fn test_filter_response_missing_data_is_empty() {
        let resp: FilterResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.data.is_empty());
    }

    #[test]
    fn test_filter_response_parse() {
        let ids = FilterResponse::parse(r#"{"data":[{"id":"123"},{"id":"124"}]}"#).unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].id, "123");

        assert!(matches!(
            FilterResponse::parse("not json"),
            Err(crate::error::SyncError::Serialization(_))
        ));
    }

    #[test]
    fn test_filter_response_rejects_object_id() {
        let err = serde_json::from_str::<FilterResponse>(r#"{"data":[{"id":{"x":1}}]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_status_patch_body() {
        let patch = StatusPatch::new(ResourceKind::Return, "51", "In transit");
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({
                "data": {
                    "id": "51",
                    "type": "returns",
                    "attributes": {"dms-status": "In transit"}
                }
            })
        );
    }

    #[test]
    fn test_resource_kind_routes() {
        assert_eq!(ResourceKind::Order.collection_path(), "/api/v1/orders");
        assert_eq!(ResourceKind::Order.filter_attribute(), "consignment_reference");
        assert_eq!(ResourceKind::Return.collection_path(), "/api/v1/admin/returns");
        assert_eq!(ResourceKind::Return.filter_attribute(), "dms_reference");
        assert_eq!(ResourceKind::Return.to_string(), "return");
    }
}
