//! Bucket feature: listing and creation.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/buckets` | List all buckets |
//! | POST | `/buckets/{bucket}` | Create a bucket |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::BucketService;
