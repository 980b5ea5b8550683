pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);
