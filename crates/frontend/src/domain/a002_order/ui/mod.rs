pub mod list;

pub use list::OrderList;
