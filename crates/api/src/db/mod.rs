pub mod climate_data;
pub mod models;
pub mod sqlite;
pub mod window;

pub use climate_data::*;
pub use models::*;
pub use sqlite::*;
pub use window::*;
