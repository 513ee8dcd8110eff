pub mod bucket_handler;

pub use bucket_handler::{__path_create_bucket, __path_list_buckets, create_bucket, list_buckets};
