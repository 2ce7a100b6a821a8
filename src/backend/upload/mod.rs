//! Upload Module
//!
//! Authenticated file upload restricted to images and PDFs.
//!
//! - **`policy`** - Filename sanitization and suffix allow-list
//! - **`files`** - `files` table operations
//! - **`handlers`** - POST /upload
//!
//! Files are written to `AppConfig::upload_dir` under their sanitized client
//! name. A second upload with the same name replaces the first on disk; both
//! uploads keep their row in `files`.

pub mod policy;

pub mod files;

pub mod handlers;

pub use files::FileRecord;
pub use handlers::upload_file;
