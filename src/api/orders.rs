use crate::data::{Address, Order, OrderItem};
use crate::response::ApiError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NewOrder {
	pub items: Vec<OrderItem>,
	pub address: Address,
	pub total: f64,
}

pub async fn place(order: &NewOrder) -> Result<Order, ApiError> {
	super::post("/orders").with_json(order).send().await
}

pub async fn list() -> Result<Vec<Order>, ApiError> {
	super::get("/orders").send().await
}
