pub mod buckets;
pub mod files;
