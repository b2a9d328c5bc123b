use pengy_web_search::config::SearchConfig;
use pengy_web_search::tool::web_search::web_search::WebSearchTool;
use std::env;
use std::error::Error;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_QUERY: &str = "when did covid start";

struct Args {
    query: String,
    api_key: Option<String>,
    endpoint: Option<String>,
}

fn parse_args() -> Args {
    let mut api_key = None;
    let mut endpoint = None;
    let mut words = Vec::new();

    for arg in env::args().skip(1) {
        if let Some((key, value)) = arg.split_once('=').filter(|_| arg.starts_with("--")) {
            match key {
                "--apikey" | "--api-key" => api_key = Some(value.to_string()),
                "--endpoint" => endpoint = Some(value.to_string()),
                "--query" => words.push(value.to_string()),
                _ => eprintln!("Warning: Unknown argument: {}", key),
            }
        } else if arg == "--help" || arg == "-h" {
            print_usage();
            std::process::exit(0);
        } else if arg.starts_with("--") {
            eprintln!("Warning: Unknown flag: {}", arg);
        } else {
            words.push(arg);
        }
    }

    let query = if words.is_empty() {
        SAMPLE_QUERY.to_string()
    } else {
        words.join(" ")
    };

    Args {
        query,
        api_key,
        endpoint,
    }
}

fn print_usage() {
    eprintln!("\nUsage: web-search [options] [query...]");
    eprintln!("\nWith no query, searches for \"{}\".", SAMPLE_QUERY);
    eprintln!("\nOptional arguments:");
    eprintln!("  --apikey=<key>          SerpApi key (default: $SERPAPI_KEY)");
    eprintln!("  --endpoint=<url>        Search endpoint (default: https://serpapi.com/search)");
    eprintln!("  --query=\"<query>\"       Query text, instead of positional words");
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args();

    let mut config = SearchConfig::from_env()?;
    if let Some(api_key) = args.api_key {
        config.api_key = Some(api_key);
    }
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }
    info!(endpoint = %config.endpoint, "web search configured");

    let tool = WebSearchTool::new(config);
    let result = tool.execute(&[args.query.as_str()], true);
    println!("{}", tool.interpreter_feedback(&result));

    Ok(())
}
