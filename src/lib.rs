//! # user-directory
//!
//! A small HTTP user directory kept in memory for the lifetime of the process.
//!
//! | Method | Path          | Success          | Failures  |
//! |--------|---------------|------------------|-----------|
//! | GET    | `/users/{id}` | 200 + JSON user  | 400, 404  |
//! | POST   | `/users`      | 201 + JSON user  | 400, 409  |
//!
//! Errors are answered with a plain-text message and the matching status.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use user_directory::app::{bootstrap, build_router};
//! use user_directory::config::{ConfigService, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_config(&ConfigService::from_env())?;
//!     let addr = config.socket_addr()?;
//!     let router = build_router(bootstrap(config)?);
//!
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod di;
pub mod error;
pub mod interceptor;
pub mod lifecycle;
pub mod module;
pub mod pipe;
pub mod users;

pub use error::{DirectoryError, Result};
pub use users::{User, format_user_display, validate_email};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{AppState, bootstrap, build_router};
    pub use crate::config::{ConfigService, ServerConfig};
    pub use crate::di::{Container, ContainerBuilder, HasContainer, Inject, Injectable};
    pub use crate::error::{DirectoryError, Result};
    pub use crate::lifecycle::shutdown_signal;
    pub use crate::module::Module;
    pub use crate::pipe::Pipe;
    pub use crate::pipe::builtins::*;
    pub use crate::users::{
        CreateUserRequest, InMemoryUserRepository, User, UserRepository, UserService,
        UsersModule, format_user_display, validate_email,
    };
}
