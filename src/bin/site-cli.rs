use clap::{Parser, Subcommand};
use serde_json::Value;
use url::Url;

#[derive(Parser)]
#[command(name = "site-cli")]
#[command(about = "Inspect a running portfolio site", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the route table
    Routes,
    /// Resolve a path (or a route name with --name)
    Resolve {
        target: String,
        #[arg(long)]
        name: bool,
    },
    /// Show the host system report
    Info,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = Url::parse(&cli.url)?;

    let request = match cli.command {
        Commands::Routes => client.get(base.join("/api/routes")?),
        Commands::Resolve { target, name } => {
            let key = if name { "name" } else { "path" };
            client.get(base.join("/api/resolve")?).query(&[(key, target)])
        }
        Commands::Info => client.get(base.join("/info")?),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    if !status.is_success() {
        eprintln!("Error: site returned status {}", status);
        std::process::exit(1);
    }
    Ok(())
}
