pub mod ingestion;
pub mod scoring;
pub mod standings;
