use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Body returned by delete endpoints.
#[derive(Serialize, Debug)]
pub struct Message {
    pub message: String,
}
