//! # Postcode API Client
//! Asynchronous wrapper around the Dutch Postcode API (`postcode-api.apiwise.nl`), resolving a postcode and optional house number to a full address with [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers who need to complete or verify Dutch addresses: configure a client with your API key, look up a postcode, then read street, town, municipality, province and coordinates from the returned [`Address`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`.
//!
//! ## Out of scope
//! Only the first address of a lookup is returned. There is no retry, caching, rate limiting, or batch lookup.
//!
//! ## Errors
//! A missing or empty API key fails construction with [`Error::Config`]. [`Client::get_address`] never fails: non-200 statuses ([`Error::Api`]), transport errors ([`Error::Request`]) and malformed bodies ([`Error::Json`]) are reported to the configured [`LookupLogger`] and yield `None`. [`Client::try_get_address`] returns them instead.
//!
//! ## Example
//! ```no_run
//! use postcode_api::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), postcode_api::Error> {
//!     let client = Client::new("my-api-key")?;
//!
//!     match client.get_address("6545CA", Some("29")).await {
//!         Some(address) => println!(
//!             "{} {}, {}",
//!             address.street().unwrap_or_default(),
//!             address.house_number().unwrap_or_default(),
//!             address.town().unwrap_or_default(),
//!         ),
//!         None => println!("No address found"),
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod logger;
mod models;

pub use client::{Client, ClientBuilder};
pub use error::{ApiError, Error};
pub use logger::{LookupLogger, TracingLogger};
pub use models::Address;

/// Result type alias for Postcode API operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
