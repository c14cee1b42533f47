pub mod activity;
pub mod entry;
pub mod record;

pub use activity::{Activity, Category};
pub use entry::Entry;
pub use record::ActivityRecord;
