//! Domain records shared by repositories, services and handlers

pub mod category;
pub mod product;
pub mod report;
pub mod validation;

pub use category::{Category, CategoryInput};
pub use product::{Product, ProductInput};
pub use report::{BestSellingProduct, DailyReport};
pub use validation::ValidationError;
