//! Files feature: object listing, upload and deletion within a bucket.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/buckets/{bucket}/files` | List all objects in a bucket |
//! | POST | `/buckets/{bucket}/files` | Upload a file (multipart field `file`) |
//! | DELETE | `/buckets/{bucket}/files/{file}` | Delete an object |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::FileService;
