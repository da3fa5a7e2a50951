//! Services sit between handlers and repositories.
//!
//! They own an `Arc<dyn Repository>` and delegate; there are no business
//! rules beyond that yet. Cloning a service is cheap.

pub mod categories;
pub mod products;
pub mod reports;

pub use categories::CategoryService;
pub use products::ProductService;
pub use reports::ReportService;
