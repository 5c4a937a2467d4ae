/*
[INPUT]:  ICOBENCH_PUBLIC_KEY / ICOBENCH_PRIVATE_KEY environment variables
[OUTPUT]: Trending ICOs and the first search page
[POS]:    Examples - signed queries against the live API
[UPDATE]: When adding new endpoints
*/

use icobench_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: query trending ICOs and search by status
///
/// Run with `RUST_LOG=icobench_adapter=debug` to see request tracing.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== ICObench Search Example ===\n");

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load credentials: {}", e);
            return;
        }
    };

    let client = match IcobenchClient::new(credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}\n", client.base_url());

    println!("Querying trending ICOs...");
    match client.trending().await {
        Ok(trending) => {
            for ico in &trending.results {
                println!("  {} (rating {:.1}) ends {}", ico.name, ico.rating, ico.dates.ico_end);
            }
        }
        Err(e) => println!("✗ Error ({:?} phase): {}", e.phase(), e),
    }

    println!("\nSearching active ICOs...");
    let filters = SearchRequest::new().status("active").order_desc("rating").page(1);
    match client.search(&filters).await {
        Ok(page) => {
            println!(
                "✓ {} ICOs across {} pages (page {})",
                page.icos, page.pages, page.current_page
            );
            for ico in &page.results {
                println!("  #{} {}", ico.id, ico.name);
            }
        }
        Err(e) => println!("✗ Error ({:?} phase): {}", e.phase(), e),
    }

    println!("\n✓ Search example complete");
}
