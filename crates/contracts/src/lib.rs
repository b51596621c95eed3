pub mod branches;
pub mod catalog;
pub mod export;
pub mod order;
pub mod search;
pub mod selection;
