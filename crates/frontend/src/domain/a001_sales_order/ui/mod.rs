pub mod details;
pub mod page;

pub use details::SalesOrderDetails;
pub use page::SalesOrderPage;
