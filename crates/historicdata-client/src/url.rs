//! Betfair historical data endpoint URLs and method names.

/// Base URL for the JSON API; the method name is appended directly.
pub const BASE_URL: &str = "https://historicdata.betfair.com/api/";

/// File download endpoint. The vendor serves this over plain HTTP, on a
/// different base path from the JSON API.
pub const DOWNLOAD_URL: &str = "http://historicdata.betfair.com/api/DownloadFile";

/// Lists data descriptions for purchased data.
pub const GET_MY_DATA: &str = "GetMyData";

/// Lists file counts by market type, country and file type.
pub const GET_COLLECTION_OPTIONS: &str = "GetCollectionOptions";

/// Computes file count and combined size for a basket of collections.
pub const GET_ADV_BASKET_DATA_SIZE: &str = "GetAdvBasketDataSize";

/// Lists the files available for download.
pub const DOWNLOAD_LIST_OF_FILES: &str = "DownloadListOfFiles";

/// Builds the full URL for a JSON API method.
#[must_use]
pub fn method_url(base_url: &str, method: &str) -> String {
    format!("{base_url}{method}")
}
