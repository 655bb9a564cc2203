mod platform;

use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = platform::cli::Cli::parse();
    platform::app::run_app(cli).await;
}
