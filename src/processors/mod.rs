pub mod catalog_builder;
pub mod pairwise_distances;

pub use catalog_builder::{build_catalog, CatalogBuild, CatalogBuilder, RowRejection};
pub use pairwise_distances::{
    closest_pair, farthest_pair, pairwise_distances, DistanceEntry, DistanceMap, PairKey,
};
