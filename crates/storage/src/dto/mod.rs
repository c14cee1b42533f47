pub mod entry;
pub mod record;
pub mod standings;
