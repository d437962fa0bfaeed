//! Fetch-and-rank use case.

use std::time::Instant;

use tracing::{info, warn};

use crate::domain::ranking::{Ranking, RankingOptions};
use crate::error::Result;
use crate::port::SnapshotSource;

/// Produces a fresh [`Ranking`] from a snapshot source on demand.
///
/// Holds no state between calls; concurrent refreshes are independent.
pub struct RankingService<S> {
    source: S,
    options: RankingOptions,
}

impl<S: SnapshotSource> RankingService<S> {
    pub fn new(source: S, options: RankingOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch one snapshot and rank it.
    ///
    /// Transport and decode failures are errors. An upstream failure flag
    /// yields `Ok` with an empty ranking.
    pub async fn refresh(&self) -> Result<Ranking> {
        let started = Instant::now();
        let snapshot = self.source.fetch_snapshot().await?;
        let ranking = Ranking::build(&snapshot, &self.options);

        if ranking.is_empty() {
            warn!(
                source = self.source.source_name(),
                upstream_success = snapshot.success,
                "No rankings available"
            );
        } else {
            info!(
                source = self.source.source_name(),
                families = ranking.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Ranking refreshed"
            );
        }

        Ok(ranking)
    }
}
