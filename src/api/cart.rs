use crate::data::CartEntry;
use crate::response::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct ServerCart {
	#[serde(default)]
	items: Vec<CartEntry>,
}

/// Body of `POST /cart`. The server merges or appends on its side; only the
/// variant reference and quantity travel, never the display snapshot.
#[derive(Debug, Serialize)]
pub struct AddItem<'a> {
	#[serde(rename = "productId")]
	pub product_id: &'a str,
	pub quantity: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub color: Option<&'a str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub size: Option<&'a str>,
}

pub async fn fetch() -> Result<Vec<CartEntry>, ApiError> {
	let cart: ServerCart = super::get("/cart").send().await?;
	Ok(cart.items)
}

/// Adds an item to the account cart, returning the updated row list.
pub async fn add(item: &AddItem<'_>) -> Result<Vec<CartEntry>, ApiError> {
	let cart: ServerCart = super::post("/cart").with_json(item).send().await?;
	Ok(cart.items)
}

pub async fn update(id: &str, quantity: u32) -> Result<(), ApiError> {
	#[derive(Serialize)]
	struct Quantity {
		quantity: u32,
	}
	super::put::<serde_json::Value>(&format!("/cart/{id}"))
		.with_json(&Quantity { quantity })
		.send_ok()
		.await
}

pub async fn remove(id: &str) -> Result<(), ApiError> {
	super::delete::<serde_json::Value>(&format!("/cart/{id}")).send_ok().await
}
