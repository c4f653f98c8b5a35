//! HTTP client for the Betfair historical data API.
//!
//! This crate provides the request/response plumbing:
//!
//! - [`url`] - Fixed endpoint URLs and method names
//! - [`HistoricalDataClient`] - Pooled async client for the five operations
//! - [`ClientError`] - Error taxonomy for the request and download paths

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/historicdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod download;
pub mod url;

pub use client::{ClientConfig, ClientError, HistoricalDataClient, Result};
