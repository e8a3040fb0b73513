use config::Config;
use fetcher::GraphQlFetcher;
use logger::StderrLogger;
use runner::{CsvExportRunner, Runner, RunnerError};

pub mod config;
pub mod fetcher;
pub mod flatten;
pub mod logger;
pub mod models;
pub mod query;
pub mod runner;
pub mod writer;

pub async fn export_poap_data(config: Config) -> Result<(), RunnerError> {
    let fetcher = GraphQlFetcher::new(config.endpoint_url());
    let mut runner = CsvExportRunner::<GraphQlFetcher, StderrLogger>::new(config, fetcher);
    runner.run().await
}
