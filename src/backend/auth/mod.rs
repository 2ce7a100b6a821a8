//! Authentication Module
//!
//! This module handles user registration, login and token issuance.
//!
//! # Architecture
//!
//! - **`users`** - User model and database operations (credential store)
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers for `/register` and `/login`
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → password hashed → user stored → `{message}`
//! 2. **Login**: email + password → hash verified → JWT returned as `{token}`
//! 3. **Protected routes**: `Authorization: Bearer <token>` checked by
//!    `middleware::auth` before the handler runs
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are signed with a single static secret from `AppConfig`
//! - Tokens expire after `token_ttl_secs` and cannot be revoked

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, register};
pub use sessions::{Claims, TokenIssuer};
pub use users::User;
