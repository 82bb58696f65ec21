use serde::{Deserialize, Serialize};

pub const HELLO_MESSAGE: &str = "hello world!";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn hello() -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
        }
    }
}
