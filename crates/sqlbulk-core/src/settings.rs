use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Copy settings forwarded untouched to the executor.
///
/// `with_bulk_copy_settings` replaces the whole value; there is no merging
/// with earlier settings. Missing keys take their defaults when deserialized,
/// so applications can keep partial settings in their own config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkCopySettings {
    /// Rows per batch sent to the server. `None` sends everything in one batch.
    pub batch_size: Option<u32>,

    /// Seconds before the copy times out.
    pub bulk_copy_timeout: u64,

    /// Stream rows to the server instead of buffering them.
    pub enable_streaming: bool,

    /// Native bulk-copy switches.
    pub options: CopyOptions,
}

/// Switches understood by the native bulk-copy facility of the database client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyOptions {
    pub keep_identity: bool,
    pub check_constraints: bool,
    pub table_lock: bool,
    pub keep_nulls: bool,
    pub fire_triggers: bool,
    pub use_internal_transaction: bool,
}

impl BulkCopySettings {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.bulk_copy_timeout)
    }
}

impl Default for BulkCopySettings {
    fn default() -> Self {
        Self {
            batch_size: None,
            bulk_copy_timeout: Self::DEFAULT_TIMEOUT_SECS,
            enable_streaming: false,
            options: CopyOptions::default(),
        }
    }
}
