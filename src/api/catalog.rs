use crate::data::{ColorOption, Product, SizeOption};
use crate::response::ApiError;
use serde::Serialize;

pub async fn products() -> Result<Vec<Product>, ApiError> {
	super::get("/products").send().await
}

pub async fn product(id: &str) -> Result<Product, ApiError> {
	super::get(&format!("/products/{id}")).send().await
}

/// Admin-side product submission. The form takes image URLs; the upload
/// pipeline lives outside this client.
#[derive(Debug, Default, Serialize)]
pub struct NewProduct {
	pub name: String,
	pub description: String,
	pub category: String,
	pub price: f64,
	pub stock: u32,
	pub images: Vec<String>,
	pub colors: Vec<ColorOption>,
	pub sizes: Vec<SizeOption>,
}

pub async fn create_product(product: &NewProduct) -> Result<Product, ApiError> {
	super::post("/products").with_json(product).send().await
}

pub async fn delete_product(id: &str) -> Result<(), ApiError> {
	super::delete::<serde_json::Value>(&format!("/products/{id}")).send_ok().await
}
