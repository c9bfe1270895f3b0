//! # vms-status-sync
//!
//! Propagates DMS consignment status changes to VMS orders and returns.
//!
//! ## Overview
//!
//! A serverless trigger delivers one [`WebhookEvent`] per status change.
//! The handler turns the raw state code into a display label, looks up the
//! order and the return sharing the consignment reference, and patches the
//! `dms-status` of whichever exist.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vms_status_sync::{handle, VmsConfig, WebhookEvent};
//!
//! # async fn example() -> vms_status_sync::Result<()> {
//! let config = VmsConfig::from_env()?;
//! let event = WebhookEvent::new("EC-000-00A-K9G", "inTransit");
//!
//! // Order update payload, or `{}` when no order matched
//! let payload = handle(&event, &config).await?;
//! println!("{}", payload);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **VmsClient** trait — lookup and status-update operations against the VMS
//! - **HttpVmsClient** — reqwest implementation of `VmsClient`
//! - **StatusSync** — one invocation: derive, look up, patch
//! - **display_status** — raw state code to human-readable label

pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod status;
pub mod types;

// Re-export core types
pub use client::{HttpVmsClient, VmsClient};
pub use config::VmsConfig;
pub use error::{Result, SyncError};
pub use handler::{handle, StatusSync, SyncReport, UpdateOutcome};
pub use status::display_status;
pub use types::{FilterResponse, ResourceKind, ResourceRef, StatusPatch, WebhookEvent};
