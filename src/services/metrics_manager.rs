use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::intent::Intent;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MetricsData {
    pub requests_total: u64,
    pub intent_usage: HashMap<String, u64>,
}

/// Served-intent counters shared across handlers.
#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn record(&self, intent: Intent) {
        let mut data = self.inner.write().await;
        data.requests_total += 1;
        *data.intent_usage.entry(intent.to_string()).or_insert(0) += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
