use poap_exporter::config::Config;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let config = Config::from_env();

    if let Err(e) = poap_exporter::export_poap_data(config).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
