pub mod body;
pub mod geo_point;
pub mod site;

pub use body::{Body, KnownBody};
pub use geo_point::{parse_location, GeoPoint};
pub use site::{LayoutKind, RawRow, RecordLayout, Site};
