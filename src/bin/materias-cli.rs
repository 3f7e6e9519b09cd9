use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "materias-cli")]
#[command(about = "Command-line client for the subject registry API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every subject
    List,
    /// Show one subject
    Get { id: u64 },
    /// Create a subject
    Create {
        titulo: String,
        #[arg(long)]
        hecho: Option<bool>,
    },
    /// Replace a subject's title and, optionally, its completion flag
    Update {
        id: u64,
        titulo: String,
        #[arg(long)]
        hecho: Option<bool>,
    },
    /// Delete a subject
    Delete { id: u64 },
}

fn body(titulo: String, hecho: Option<bool>) -> Value {
    let mut body = json!({ "titulo": titulo });
    if let Some(hecho) = hecho {
        body["hecho"] = Value::Bool(hecho);
    }
    body
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = format!("{}/api/materias", cli.url.trim_end_matches('/'));

    let request = match cli.command {
        Commands::List => client.get(&base),
        Commands::Get { id } => client.get(format!("{base}/{id}")),
        Commands::Create { titulo, hecho } => client.post(&base).json(&body(titulo, hecho)),
        Commands::Update { id, titulo, hecho } => {
            client.put(format!("{base}/{id}")).json(&body(titulo, hecho))
        }
        Commands::Delete { id } => client.delete(format!("{base}/{id}")),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if !text.is_empty() {
            eprintln!("{}", text);
        }
        std::process::exit(1);
    }

    if text.is_empty() {
        println!("{}", status);
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
