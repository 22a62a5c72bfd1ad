pub mod dates;
pub mod grid;
pub mod ingest;
pub mod reading;
