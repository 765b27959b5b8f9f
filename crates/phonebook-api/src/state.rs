//! Shared application state for the HTTP API.
//!
//! [`AppState`] owns the [`QuerySurface`] over whichever storage backend the
//! deployment configured. Handlers receive it as `State<Arc<AppState>>`.

use phonebook_core::Directory;
use phonebook_db::StoreBackend;

use crate::surface::QuerySurface;

/// State shared by every request handler.
#[derive(Debug)]
pub struct AppState {
    /// Query surface over the configured backend.
    pub surface: QuerySurface<StoreBackend>,
}

impl AppState {
    /// Build state around an already-configured directory.
    pub const fn new(directory: Directory<StoreBackend>) -> Self {
        Self {
            surface: QuerySurface::new(directory),
        }
    }
}
