use crate::model::id::ClientId;

pub struct CreateClient {
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug)]
pub struct UpdateClient {
    pub client_id: ClientId,
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug)]
pub struct DeleteClient {
    pub client_id: ClientId,
}
