//! PostgREST readiness probe

use async_trait::async_trait;

use pickup_core::traits::{HealthProbe, RepoResult};

use crate::client::RestClient;
use crate::models::IdRow;

/// Reads at most one community id to prove the endpoint and key work
#[derive(Debug, Clone)]
pub struct RestHealthProbe {
    client: RestClient,
}

impl RestHealthProbe {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HealthProbe for RestHealthProbe {
    async fn ping(&self) -> RepoResult<()> {
        let _: Vec<IdRow> = self
            .client
            .table("communities")
            .select("id")
            .limit(1)
            .fetch()
            .await?;
        Ok(())
    }
}
