mod admin;
pub use admin::*;
mod cart;
pub use cart::*;
mod checkout;
pub use checkout::*;
mod home;
pub use home::*;
mod login;
pub use login::*;
mod not_found;
pub use not_found::*;
mod product;
pub use product::*;
mod products;
pub use products::*;
mod profile;
pub use profile::*;
mod register;
pub use register::*;
mod wishlist;
pub use wishlist::*;
