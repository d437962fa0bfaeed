//! Snapshot source port.

use async_trait::async_trait;

use crate::domain::snapshot::Snapshot;
use crate::error::Result;

/// Anything that can produce one bazaar snapshot.
///
/// Implementations report transport and decoding problems as errors. A
/// snapshot that decodes but carries `success: false` is returned as-is;
/// the ranking engine turns it into an empty ranking.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch a single snapshot.
    async fn fetch_snapshot(&self) -> Result<Snapshot>;

    /// Short name used in logs.
    fn source_name(&self) -> &'static str;
}
