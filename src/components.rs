mod auth_switch;
pub use auth_switch::*;
mod navbar;
pub use navbar::*;
mod product_card;
pub use product_card::*;
mod protected;
pub use protected::*;
mod toaster;
pub use toaster::*;
