use axum::Json;
use serde::Serialize;

pub const GREETING: &str = "Hello from axum on EKS";

#[derive(Serialize)]
pub struct Greeting {
    message: &'static str,
}

pub async fn index() -> Json<Greeting> {
    Json(Greeting { message: GREETING })
}
