use crate::errors::Result;
use crate::holdings::holdings_model::Holding;
use crate::portfolio::summary::{calculate_summary, PortfolioSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use holdfolio_holdings_api::HoldingsApi;
use log::{debug, error, info, warn};
use serde::Serialize;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Progress of the most recent load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// The last load failed; carries the user-facing message.
    Failed(String),
}

/// Holdings and their summary as of one successful fetch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub holdings: Vec<Holding>,
    pub summary: PortfolioSummary,
    pub fetched_at: DateTime<Utc>,
}

impl PortfolioSnapshot {
    pub fn new(holdings: Vec<Holding>, fetched_at: DateTime<Utc>) -> Self {
        let summary = calculate_summary(&holdings);
        Self {
            holdings,
            summary,
            fetched_at,
        }
    }
}

#[async_trait]
pub trait HoldingsServiceTrait: Send + Sync {
    /// Fetches holdings once and recomputes the summary.
    async fn load(&self) -> Result<PortfolioSnapshot>;

    fn state(&self) -> LoadState;

    fn holdings_count(&self) -> usize;

    /// Holding at `index`, or `None` when out of range.
    fn holding_at(&self, index: usize) -> Option<Holding>;

    fn all_holdings(&self) -> Vec<Holding>;

    /// Summary of the last successful load.
    fn summary(&self) -> Option<PortfolioSummary>;

    fn snapshot(&self) -> Option<PortfolioSnapshot>;
}

#[derive(Default)]
struct ServiceState {
    load_state: LoadState,
    snapshot: Option<PortfolioSnapshot>,
}

/// Owns the holdings of the last successful fetch and the current load state.
///
/// A failed load does not discard the previous snapshot.
pub struct HoldingsService {
    api: Arc<dyn HoldingsApi>,
    state: RwLock<ServiceState>,
}

impl HoldingsService {
    pub fn new(api: Arc<dyn HoldingsApi>) -> Self {
        Self {
            api,
            state: RwLock::new(ServiceState::default()),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, ServiceState> {
        self.state.read().unwrap_or_else(|poisoned| {
            warn!("Holdings state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ServiceState> {
        self.state.write().unwrap_or_else(|poisoned| {
            warn!("Holdings state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

#[async_trait]
impl HoldingsServiceTrait for HoldingsService {
    async fn load(&self) -> Result<PortfolioSnapshot> {
        self.write_state().load_state = LoadState::Loading;
        debug!("Loading user holdings");

        match self.api.fetch_holdings_response().await {
            Ok(response) => {
                let holdings: Vec<Holding> = response
                    .into_holdings()
                    .into_iter()
                    .map(Holding::from)
                    .collect();
                let snapshot = PortfolioSnapshot::new(holdings, Utc::now());
                info!(
                    "Loaded {} holdings, total P&L {:.2}",
                    snapshot.holdings.len(),
                    snapshot.summary.total_pnl
                );

                let mut state = self.write_state();
                state.snapshot = Some(snapshot.clone());
                state.load_state = LoadState::Loaded;
                Ok(snapshot)
            }
            Err(e) => {
                error!("Failed to load holdings ({}): {}", e.category(), e);
                self.write_state().load_state = LoadState::Failed(e.user_message());
                Err(e.into())
            }
        }
    }

    fn state(&self) -> LoadState {
        self.read_state().load_state.clone()
    }

    fn holdings_count(&self) -> usize {
        self.read_state()
            .snapshot
            .as_ref()
            .map_or(0, |s| s.holdings.len())
    }

    fn holding_at(&self, index: usize) -> Option<Holding> {
        self.read_state()
            .snapshot
            .as_ref()
            .and_then(|s| s.holdings.get(index).cloned())
    }

    fn all_holdings(&self) -> Vec<Holding> {
        self.read_state()
            .snapshot
            .as_ref()
            .map(|s| s.holdings.clone())
            .unwrap_or_default()
    }

    fn summary(&self) -> Option<PortfolioSummary> {
        self.read_state().snapshot.as_ref().map(|s| s.summary)
    }

    fn snapshot(&self) -> Option<PortfolioSnapshot> {
        self.read_state().snapshot.clone()
    }
}
