use crate::database::PracticeDatabase;
use crate::error::AppResult;
use crate::executor::{self, QueryOutcome};
use crate::gatekeeper::{self, Verdict};
use crate::introspect;
use crate::samples;
use sqlcamp_types::{ColumnDescriptor, SampleQuery};
use std::collections::BTreeMap;
use std::time::Duration;

/// Front door for the practice sandbox. Owns the pooled store handle; holds
/// no per-request state, so it is shared behind an `Arc` across concurrent
/// requests.
pub struct PracticeGateway {
    database: PracticeDatabase,
    query_timeout: Duration,
}

impl PracticeGateway {
    pub fn new(database: PracticeDatabase, query_timeout: Duration) -> Self {
        PracticeGateway {
            database,
            query_timeout,
        }
    }

    /// Gates first; a rejected statement comes back as a `Failure` without
    /// the store ever being contacted.
    pub async fn run_query(&self, text: &str) -> AppResult<QueryOutcome> {
        match gatekeeper::classify(text) {
            Verdict::Rejected(reason) => Ok(QueryOutcome::Failure { message: reason }),
            Verdict::Allowed => {
                executor::execute(self.database.pool(), text, self.query_timeout).await
            }
        }
    }

    pub async fn get_schema(&self) -> AppResult<BTreeMap<String, Vec<ColumnDescriptor>>> {
        introspect::describe_schema(self.database.pool()).await
    }

    pub fn get_samples(&self) -> Vec<SampleQuery> {
        samples::sample_queries()
    }

    pub async fn close(&self) {
        self.database.close().await;
    }
}
