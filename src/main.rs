use std::env;
use std::time::Duration;

use receitas_search::{RecipeSearchEngine, SearchConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err("Please provide a search term as an argument".into());
    }
    let query = args[1..].join(" ");

    let config = SearchConfig::load()?;
    let engine = RecipeSearchEngine::builder()
        .base_url(config.base_url)
        .timeout(Duration::from_secs(config.timeout))
        .build()?;

    let results = engine.search(&query).await;
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
