use std::sync::Arc;
use std::thread;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use thiserror::Error;

use crate::config::Config;
use crate::fetcher::{FetchError, Fetcher};
use crate::flatten::flatten;
use crate::logger::Logger;
use crate::models::FlatRow;
use crate::writer::{write_rows, WriterError};

const FALLBACK_CONCURRENCY: usize = 4;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("{0}")]
    WriteError(#[from] WriterError),
}

#[async_trait]
pub trait Runner {
    async fn run(&mut self) -> Result<(), RunnerError>;
}

/// Drives one fetch+flatten unit per configured event id across a bounded
/// pool of concurrent workers, then writes all collected rows once.
pub struct CsvExportRunner<F: Fetcher + Send + Sync, L: Logger> {
    config: Config,
    fetcher: Arc<F>,
    logger: L,
}

impl<F: Fetcher + Send + Sync, L: Logger + Default> CsvExportRunner<F, L> {
    pub fn new(config: Config, fetcher: F) -> Self {
        Self {
            config,
            fetcher: Arc::new(fetcher),
            logger: L::default(),
        }
    }
}

#[async_trait]
impl<F: Fetcher + Send + Sync + 'static, L: Logger + Send + Sync> Runner
    for CsvExportRunner<F, L>
{
    async fn run(&mut self) -> Result<(), RunnerError> {
        let concurrency = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(FALLBACK_CONCURRENCY);

        // Units are independent; results arrive in completion order.
        let outcomes: Vec<(i64, Result<Vec<FlatRow>, FetchError>)> =
            stream::iter(self.config.event_ids.clone())
                .map(|event_id| {
                    let fetcher = Arc::clone(&self.fetcher);
                    async move {
                        let result = fetcher
                            .fetch(event_id)
                            .await
                            .map(|response| flatten(&response));
                        (event_id, result)
                    }
                })
                .buffer_unordered(concurrency)
                .collect()
                .await;

        let mut rows = Vec::new();
        for (event_id, result) in outcomes {
            match result {
                Ok(event_rows) => {
                    self.logger.info(format!(
                        "Processed event {} ({} rows)",
                        event_id,
                        event_rows.len()
                    ));
                    rows.extend(event_rows);
                }
                // A failed unit contributes no rows and never aborts siblings.
                Err(e) => self.logger.error(e.to_string()),
            }
        }

        let written = write_rows(&self.config.output_path, &rows)?;
        self.logger.info(format!(
            "Data successfully written to {} ({} rows)",
            self.config.output_path.display(),
            written
        ));
        Ok(())
    }
}
