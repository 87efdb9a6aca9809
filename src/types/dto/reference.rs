use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// One administrative region record as served by the reference source
///
/// The upstream contract uses Portuguese field names; they are kept
/// as-is on our wire so the pickers can bind directly.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct RegionRecord {
    /// Region identifier
    pub id: u32,

    /// Region name
    pub nome: String,
}
