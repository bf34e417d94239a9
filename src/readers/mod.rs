pub mod site_reader;

pub use site_reader::{RowBatch, SiteReader};
