pub mod constants;
pub mod coordinates;

pub use constants::*;
pub use coordinates::{decimal_to_dms, parse_coordinate, Axis, CompassDirection, DmsAngle};
