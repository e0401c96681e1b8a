use clap::Parser;
use opreturn_extract::cli::{self, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let pause = cli.pause;

    let code = match cli::run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    if pause {
        cli::wait_for_enter();
    }
    std::process::exit(code);
}
