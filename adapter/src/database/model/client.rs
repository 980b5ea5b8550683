use kernel::model::{client::Client, id::ClientId};

#[derive(sqlx::FromRow)]
pub struct ClientRow {
    pub client_id: ClientId,
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

impl From<ClientRow> for Client {
    fn from(value: ClientRow) -> Self {
        let ClientRow {
            client_id,
            name,
            contact_name,
            contact_email,
            contact_phone,
            address,
        } = value;
        Client {
            client_id,
            name,
            contact_name,
            contact_email,
            contact_phone,
            address,
        }
    }
}
