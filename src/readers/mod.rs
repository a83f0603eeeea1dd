pub mod station_fetcher;
pub mod xml_reader;

pub use station_fetcher::{HttpFetcher, StationFetcher};
pub use xml_reader::{extract_block, StationDocument};
