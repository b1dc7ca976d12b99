//! Web server module
//!
//! Provides the HTML search page, the JSON API and CSV export.

mod handlers;
mod routes;
mod state;
mod templates;
mod view;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
pub use view::{format_followers, CreatorRow, PageState};
