//! Rust client for Betfair's historical sports data API.
//!
//! This is a facade crate that re-exports functionality from the
//! historicdata workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use historicdata::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HistoricalDataClient::new(ClientConfig::new("<ssoid>"))?;
//!
//!     let range = DateRange::new(
//!         chrono::NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2021, 3, 31).unwrap(),
//!     )?;
//!     let params = CollectionParams::new("Soccer", Plan::Basic, range);
//!
//!     let files = client.file_list(&params).await?;
//!     for file in files.as_array().into_iter().flatten() {
//!         if let Some(path) = file.as_str() {
//!             let name = client.download_file(path, None).await?;
//!             println!("saved {name}");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/historicdata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use historicdata_types::*;

// Re-export client functionality
pub use historicdata_client::{ClientConfig, ClientError, HistoricalDataClient, Result, url};

/// Prelude module for convenient imports.
///
/// ```
/// use historicdata::prelude::*;
/// ```
pub mod prelude {
    pub use historicdata_types::{
        ApiError, ApiErrorCause, CollectionParams, DateRange, DateRangeError, Plan,
    };

    pub use historicdata_client::{ClientConfig, ClientError, HistoricalDataClient, Result};
}
