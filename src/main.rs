#[tokio::main]
async fn main() {
    let config = githubtransfer::cli::run();

    tracing_subscriber::fmt()
        .with_env_filter(githubtransfer::log_filter())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = githubtransfer::run(config).await {
        eprintln!("githubtransfer: {:#}", e);
        std::process::exit(1);
    }
}
