//! One complete census: session, pipeline, record.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::api::HelixClient;
use crate::config::CensusConfig;
use crate::error::CensusError;
use crate::record::CensusRecord;
use crate::service::CensusService;

/// Run a census against the configured endpoints and append the result to
/// `output`.
///
/// The file is only touched after every network step and the metric have
/// succeeded.
pub async fn run_census(config: &CensusConfig, output: &Path) -> Result<CensusRecord, CensusError> {
    let client = HelixClient::connect(config).await?;
    info!(
        client_id = %client.session().client_id(),
        expires_in = client.session().expires_in(),
        "API session ready"
    );

    let summary = CensusService::new(Arc::new(client)).run().await?;

    let record = CensusRecord::new(&summary, &chrono::Local::now());
    record.append_to(output)?;

    info!(
        output = %output.display(),
        line = %record.to_csv_line().trim_end(),
        "Census record appended"
    );

    Ok(record)
}
