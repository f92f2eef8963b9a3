//! Import job operations for the v2 protocol.
//!
//! Import jobs bulk-load contacts or suppressed destinations from a CSV
//! or JSON object in S3.

use serde::{Deserialize, Serialize};

use super::{encode_path_segment, paginate, PageOpts, V2Operation};
use crate::http::HttpMethod;

/// Where an import job writes its records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportDestination {
    /// Target contact list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_list_destination: Option<ContactListDestination>,
    /// Target suppression list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppression_list_destination: Option<SuppressionListDestination>,
}

impl ImportDestination {
    /// Import into a contact list.
    pub fn contact_list(name: impl Into<String>, action: ImportAction) -> Self {
        Self {
            contact_list_destination: Some(ContactListDestination {
                contact_list_name: name.into(),
                contact_list_import_action: action,
            }),
            suppression_list_destination: None,
        }
    }

    /// Import into the account suppression list.
    pub fn suppression_list(action: ImportAction) -> Self {
        Self {
            contact_list_destination: None,
            suppression_list_destination: Some(SuppressionListDestination {
                suppression_list_import_action: action,
            }),
        }
    }
}

/// Contact list import target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContactListDestination {
    /// The name of the contact list.
    pub contact_list_name: String,
    /// How imported records are applied.
    pub contact_list_import_action: ImportAction,
}

/// Suppression list import target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuppressionListDestination {
    /// How imported records are applied.
    pub suppression_list_import_action: ImportAction,
}

/// How an import job applies its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportAction {
    /// Remove matching records.
    Delete,
    /// Add or overwrite records.
    Put,
}

/// Source data of an import job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportDataSource {
    /// S3 URL of the object to import.
    pub s3_url: String,
    /// Format of the object.
    pub data_format: DataFormat,
}

impl ImportDataSource {
    /// Reference an S3 object.
    pub fn new(s3_url: impl Into<String>, data_format: DataFormat) -> Self {
        Self {
            s3_url: s3_url.into(),
            data_format,
        }
    }
}

/// Format of import source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataFormat {
    /// Comma-separated values.
    Csv,
    /// Newline-delimited JSON.
    Json,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct CreateImportJobRequest<'a> {
    import_destination: &'a ImportDestination,
    import_data_source: &'a ImportDataSource,
}

/// Build a `CreateImportJob` operation.
pub fn create_import_job(
    destination: &ImportDestination,
    data_source: &ImportDataSource,
) -> V2Operation {
    V2Operation::new(HttpMethod::Post, "/v2/email/import-jobs").with_json(
        &CreateImportJobRequest {
            import_destination: destination,
            import_data_source: data_source,
        },
    )
}

/// Build a `GetImportJob` operation.
pub fn get_import_job(job_id: &str) -> V2Operation {
    V2Operation::new(
        HttpMethod::Get,
        format!("/v2/email/import-jobs/{}", encode_path_segment(job_id)),
    )
}

/// Build a `ListImportJobs` operation.
pub fn list_import_jobs(opts: &PageOpts) -> V2Operation {
    V2Operation::new(HttpMethod::Get, paginate("/v2/email/import-jobs", opts))
}
