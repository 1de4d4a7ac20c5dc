//! Look up a single address.
//!
//! ```text
//! POSTCODE_API_KEY=... cargo run --example lookup -- 6545CA 29
//! ```

use postcode_api::Client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), postcode_api::Error> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("postcode_api=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let api_key = std::env::var("POSTCODE_API_KEY").unwrap_or_default();
    let client = Client::new(api_key)?;

    let mut args = std::env::args().skip(1);
    let postcode = args.next().unwrap_or_else(|| "6545CA".to_string());
    let house_number = args.next();

    match client.get_address(&postcode, house_number.as_deref()).await {
        Some(address) => {
            println!("Street:       {}", address.street().unwrap_or_default());
            println!("Number:       {}", address.house_number().unwrap_or_default());
            println!("Postcode:     {}", address.postcode().unwrap_or_default());
            println!("Town:         {}", address.town().unwrap_or_default());
            println!("Municipality: {}", address.municipality().unwrap_or_default());
            println!("Province:     {}", address.province().unwrap_or_default());
            println!("WGS84:        {:?} {:?}", address.latitude(), address.longitude());
            println!("RD:           {:?} {:?}", address.x(), address.y());
            println!("Year:         {:?}", address.year());
        }
        None => println!("No address found for {postcode}"),
    }

    Ok(())
}
