//! Navigation module - page and view switching.

mod page;
mod router;

pub use page::{HomeView, Page};
pub use router::ViewRouter;
