pub mod cli;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;

pub use error::{CoordinateIssue, Result, SiteError};
pub use models::{parse_location, Body, GeoPoint, Site};
pub use processors::{build_catalog, closest_pair, farthest_pair, pairwise_distances};
pub use utils::parse_coordinate;
