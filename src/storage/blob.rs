use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, IF_NONE_MATCH};
use reqwest::StatusCode;
use tracing::info;

use crate::error::ExtractorError;

/// Storage account holding the `nssp-etl` container.
pub const DEFAULT_ACCOUNT_URL: &str = "https://cfaazurebatchprd.blob.core.windows.net";
pub const DEFAULT_CONTAINER: &str = "nssp-etl";

const ACCOUNT_URL_ENV: &str = "AZURE_STORAGE_ACCOUNT_URL";
const CONTAINER_ENV: &str = "AZURE_STORAGE_CONTAINER";
const SAS_TOKEN_ENV: &str = "AZURE_STORAGE_SAS_TOKEN";

const BLOB_API_VERSION: &str = "2021-08-06";

/// Blob path for the point-exclusions CSV for one report date.
pub fn point_exclusions_blob_name(report_date: NaiveDate) -> String {
    format!("outliers-v2/{report_date}.csv")
}

/// Blob path for the state-exclusions CSV for one report date.
pub fn state_exclusions_blob_name(report_date: NaiveDate) -> String {
    format!("state_exclusions/{report_date}_state_exclusions.csv")
}

/// Uploads block blobs into a single container, authenticated by SAS token.
pub struct BlobContainerClient {
    http: Client,
    account_url: String,
    container: String,
    sas_token: String,
}

impl BlobContainerClient {
    pub fn new(
        account_url: impl Into<String>,
        container: impl Into<String>,
        sas_token: impl Into<String>,
    ) -> Self {
        let account_url = account_url.into();
        let sas_token = sas_token.into();
        Self {
            http: Client::new(),
            account_url: account_url.trim_end_matches('/').to_string(),
            container: container.into(),
            sas_token: sas_token.trim_start_matches('?').to_string(),
        }
    }

    /// Builds a client from the environment. The SAS token is required;
    /// account URL and container fall back to the production defaults.
    pub fn from_env() -> Result<Self> {
        let account_url =
            std::env::var(ACCOUNT_URL_ENV).unwrap_or_else(|_| DEFAULT_ACCOUNT_URL.to_string());
        let container =
            std::env::var(CONTAINER_ENV).unwrap_or_else(|_| DEFAULT_CONTAINER.to_string());
        let sas_token = std::env::var(SAS_TOKEN_ENV)
            .with_context(|| format!("{SAS_TOKEN_ENV} is not set; a SAS token is required to upload"))?;

        Ok(Self::new(account_url, container, sas_token))
    }

    pub fn blob_url(&self, name: &str) -> String {
        format!(
            "{}/{}/{}?{}",
            self.account_url, self.container, name, self.sas_token
        )
    }

    /// Uploads one CSV as a block blob. Without `overwrite` the request
    /// carries `If-None-Match: *`, so an existing blob surfaces as a
    /// conflict instead of being replaced.
    pub fn upload_csv(&self, name: &str, data: Vec<u8>, overwrite: bool) -> Result<()> {
        let bytes = data.len();
        let request = self.upload_request(name, data, overwrite)?;

        let response = self
            .http
            .execute(request)
            .with_context(|| format!("upload request for blob {name} failed"))?;

        check_upload_status(name, response.status())?;
        info!(blob = name, bytes, "uploaded");
        Ok(())
    }

    fn upload_request(
        &self,
        name: &str,
        data: Vec<u8>,
        overwrite: bool,
    ) -> Result<reqwest::blocking::Request> {
        let mut request = self
            .http
            .put(self.blob_url(name))
            .header("x-ms-blob-type", "BlockBlob")
            .header("x-ms-version", BLOB_API_VERSION)
            .header(CONTENT_TYPE, "text/csv")
            .body(data);

        if !overwrite {
            request = request.header(IF_NONE_MATCH, "*");
        }

        request
            .build()
            .with_context(|| format!("building upload request for blob {name}"))
    }
}

/// Maps the blob service's response status to the upload outcome. A 409 or
/// 412 means the blob already exists and the request asked not to replace it.
fn check_upload_status(name: &str, status: StatusCode) -> Result<(), ExtractorError> {
    match status {
        status if status.is_success() => Ok(()),
        StatusCode::CONFLICT | StatusCode::PRECONDITION_FAILED => {
            Err(ExtractorError::BlobConflict {
                name: name.to_string(),
            })
        }
        status => Err(ExtractorError::UploadFailed {
            name: name.to_string(),
            status: status.as_u16(),
        }),
    }
}
