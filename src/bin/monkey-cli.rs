use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use monkeylines::Exchange;

#[derive(Parser)]
#[command(name = "monkey-cli")]
#[command(about = "Fetch insults and comebacks from a MonkeyLines server", long_about = None)]
struct Cli {
    /// Base URL of the HTTP endpoint
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Address of the TCP line endpoint
    #[arg(short, long, default_value = "localhost:8023")]
    addr: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a random insult or comeback
    Line,
    /// Fetch an insult
    Insult,
    /// Fetch a comeback
    Comeback,
    /// Fetch a matched insult and comeback
    Exchange {
        /// Print the raw JSON instead of a dialogue
        #[arg(long)]
        json: bool,
    },
    /// Read one line from the TCP endpoint
    Tcp,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Line => print_text(&client, &cli.url, "line").await?,
        Commands::Insult => print_text(&client, &cli.url, "insult").await?,
        Commands::Comeback => print_text(&client, &cli.url, "comeback").await?,
        Commands::Exchange { json } => {
            let res = client.get(format!("{}/exchange", cli.url)).send().await?;
            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: server returned status {}", status);
                return Ok(());
            }
            let exchange: Exchange = res.json().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&exchange)?);
            } else {
                println!("- {}", exchange.insult);
                println!("- {}", exchange.comeback);
            }
        }
        Commands::Tcp => {
            let mut stream = TcpStream::connect(&cli.addr).await?;
            let mut line = String::new();
            stream.read_to_string(&mut line).await?;
            print!("{}", line);
        }
    }

    Ok(())
}

async fn print_text(
    client: &reqwest::Client,
    base: &str,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let res = client.get(format!("{}/{}", base, path)).send().await?;
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }
    print!("{}", text);
    Ok(())
}
