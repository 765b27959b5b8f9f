//! Query surface and HTTP API for the phonebook directory.
//!
//! ```text
//! HTTP (Axum router) --> QuerySurface --> Directory --> PersonStore
//! ```
//!
//! The [`QuerySurface`] exposes the five external operations (`personCount`,
//! `allPeople`, `findPerson`, `addPerson`, `editPhone`) plus the SDL contract.
//! Engine errors become [`ApiError`]s with stable codes; the Axum layer
//! renders them as `{"error", "code", "status"}` JSON bodies.
//!
//! # Modules
//!
//! - [`surface`] -- [`QuerySurface`] and the [`PersonView`] projection
//! - [`schema`] -- SDL rendering
//! - [`error`] -- [`ApiError`] and [`ErrorCode`]
//! - [`handlers`] / [`router`] -- REST binding
//! - [`server`] -- Bind, serve, and shutdown
//! - [`state`] -- Shared handler state

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod server;
pub mod state;
pub mod surface;

// Re-export primary types for convenience.
pub use error::{ApiError, ErrorCode};
pub use router::build_router;
pub use server::{ServerError, bind, ctrl_c, serve};
pub use state::AppState;
pub use surface::{PersonView, QuerySurface};
