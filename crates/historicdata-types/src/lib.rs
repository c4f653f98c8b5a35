//! Core types for the historicdata Betfair historical data client.
//!
//! This crate provides the fundamental data structures used throughout
//! historicdata:
//!
//! - [`CollectionParams`] - Request parameters shared by the collection endpoints
//! - [`Plan`] - Purchased service tier
//! - [`DateRange`] - Date range a collection request covers
//! - [`ApiError`] - Failure raised by the shared request path

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/historicdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod params;
mod plan;

pub use date_range::{DateRange, DateRangeError};
pub use error::{ApiError, ApiErrorCause};
pub use params::CollectionParams;
pub use plan::Plan;
