pub mod details;
pub mod picker;
pub mod status;

pub use details::PromoCard;
pub use picker::PedidoCard;
pub use status::CatalogStatus;
