//! Status sync handler
//!
//! `StatusSync` runs one webhook invocation end to end: derive the display
//! status, look up the matching order and return, and patch whichever exist.

use crate::client::{HttpVmsClient, VmsClient};
use crate::config::VmsConfig;
use crate::error::{Result, SyncError};
use crate::status::display_status;
use crate::types::{FilterResponse, ResourceKind, ResourceRef, WebhookEvent};

/// Result of one resource branch of a sync
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// No resource matched the consignment reference
    Skipped,
    /// The first match was patched; `body` is the parsed VMS response
    Updated { id: String, body: serde_json::Value },
}

impl UpdateOutcome {
    /// Payload reported for this branch (`{}` when skipped)
    pub fn payload(&self) -> serde_json::Value {
        self.clone().into_payload()
    }

    pub fn into_payload(self) -> serde_json::Value {
        match self {
            UpdateOutcome::Skipped => serde_json::json!({}),
            UpdateOutcome::Updated { body, .. } => body,
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}

/// Everything a sync did, across both resource kinds
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    /// Human-readable status written to the VMS
    pub display_status: String,
    pub order: UpdateOutcome,
    pub return_: UpdateOutcome,
}

impl SyncReport {
    /// The invocation's success payload: the order branch only
    ///
    /// The return branch is executed but never surfaced here; callers of
    /// the webhook depend on this shape.
    pub fn into_order_payload(self) -> serde_json::Value {
        self.order.into_payload()
    }
}

/// Propagates DMS consignment states to the VMS
pub struct StatusSync {
    client: Box<dyn VmsClient>,
}

impl StatusSync {
    /// Create a handler over any VMS client
    pub fn new(client: impl VmsClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Create a handler talking HTTP to the configured VMS
    pub fn from_config(config: VmsConfig) -> Result<Self> {
        Ok(Self::new(HttpVmsClient::new(config)?))
    }

    /// Get the client name
    pub fn client_name(&self) -> &str {
        self.client.name()
    }

    /// Handle one webhook event, returning the order update payload
    pub async fn handle(&self, event: &WebhookEvent) -> Result<serde_json::Value> {
        Ok(self.sync(event).await?.into_order_payload())
    }

    /// Handle one webhook event, reporting both branches
    pub async fn sync(&self, event: &WebhookEvent) -> Result<SyncReport> {
        let status = display_status(&event.consignment_state)?;
        let reference = event.consignment_reference.as_str();
        if reference.trim().is_empty() {
            return Err(SyncError::InvalidEvent(
                "ConsignmentReference is empty".to_string(),
            ));
        }

        tracing::info!(
            reference = %reference,
            state = %event.consignment_state,
            status = %status,
            "Syncing consignment status"
        );

        // Both lookups run to completion, and both statuses are checked
        // before either body is decoded.
        let (orders, returns) = futures::join!(
            self.client.lookup(ResourceKind::Order, reference),
            self.client.lookup(ResourceKind::Return, reference),
        );
        let (orders, returns) = (orders?, returns?);
        let orders = FilterResponse::parse(&orders)?;
        let returns = FilterResponse::parse(&returns)?;

        tracing::debug!(
            orders = orders.len(),
            returns = returns.len(),
            "VMS lookups completed"
        );

        let (order, return_) = futures::try_join!(
            self.apply(ResourceKind::Order, reference, orders.first(), &status),
            self.apply(ResourceKind::Return, reference, returns.first(), &status),
        )?;

        Ok(SyncReport {
            display_status: status,
            order,
            return_,
        })
    }

    async fn apply(
        &self,
        kind: ResourceKind,
        reference: &str,
        target: Option<&ResourceRef>,
        status: &str,
    ) -> Result<UpdateOutcome> {
        let Some(target) = target else {
            tracing::info!(
                kind = %kind,
                reference = %reference,
                "No {} with DMS reference {}, skipping",
                kind,
                reference
            );
            return Ok(UpdateOutcome::Skipped);
        };

        let body = self.client.update_status(kind, &target.id, status).await?;

        tracing::info!(kind = %kind, id = %target.id, status = %status, "Status updated");

        Ok(UpdateOutcome::Updated {
            id: target.id.clone(),
            body,
        })
    }
}

/// Handle one webhook event against the configured VMS
///
/// Convenience entry point for serverless triggers: builds an HTTP client
/// from `config` and returns the order update payload.
pub async fn handle(event: &WebhookEvent, config: &VmsConfig) -> Result<serde_json::Value> {
    StatusSync::from_config(config.clone())?.handle(event).await
}
