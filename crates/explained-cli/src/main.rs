use clap::Parser;
use explained_cli::{CliArgs, ExplainedCli};

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let result = match ExplainedCli::from_args("explained", &args) {
        Ok(app) => app.run(args).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
