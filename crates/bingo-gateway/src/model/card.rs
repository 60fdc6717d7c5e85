use bingo_core::Customization;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    #[serde(default)]
    pub items: Option<Vec<String>>,
    #[serde(default)]
    pub customization: Option<Customization>,
}

#[derive(Debug, Serialize)]
pub struct CreateCardResponse {
    pub message: &'static str,
    pub code: String,
}
