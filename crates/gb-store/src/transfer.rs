//! Portable save files.

use gb_core::CampaignState;

use crate::error::{ImportError, StoreError, StoreResult};
use crate::migrate::{MigrationPath, RawCampaign, migrate};

/// Suggested file name for exported campaigns.
pub const EXPORT_FILE_NAME: &str = "greenbox-campaign.json";

/// Serialize the campaign as pretty-printed JSON.
pub fn export_campaign(state: &CampaignState) -> StoreResult<Vec<u8>> {
    serde_json::to_vec_pretty(state).map_err(StoreError::Encode)
}

/// Parse and migrate an exported campaign.
///
/// The file must carry `agents` and `logs`; everything else may be missing or
/// in a legacy shape.
pub fn import_campaign(bytes: &[u8]) -> Result<CampaignState, ImportError> {
    let raw: RawCampaign = serde_json::from_slice(bytes)?;
    if raw.agents.is_none() {
        return Err(ImportError::MissingField("agents"));
    }
    if raw.logs.is_none() {
        return Err(ImportError::MissingField("logs"));
    }
    Ok(migrate(raw, MigrationPath::Import))
}
