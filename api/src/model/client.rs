use super::{blank_as_none, trimmed};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    client::{
        event::{CreateClient, UpdateClient},
        Client,
    },
    id::ClientId,
};
use serde::{Deserialize, Serialize};

// 作成・更新で共通のリクエスト
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    #[garde(length(min = 1, max = 255))]
    #[serde(deserialize_with = "trimmed")]
    pub name: String,
    #[garde(length(max = 255))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub contact_name: Option<String>,
    #[garde(email, length(max = 255))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub contact_email: Option<String>,
    #[garde(length(max = 64))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub contact_phone: Option<String>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub address: Option<String>,
}

impl From<ClientRequest> for CreateClient {
    fn from(value: ClientRequest) -> Self {
        let ClientRequest {
            name,
            contact_name,
            contact_email,
            contact_phone,
            address,
        } = value;
        CreateClient {
            name,
            contact_name,
            contact_email,
            contact_phone,
            address,
        }
    }
}

#[derive(new)]
pub struct UpdateClientRequestWithId(ClientId, ClientRequest);

impl From<UpdateClientRequestWithId> for UpdateClient {
    fn from(value: UpdateClientRequestWithId) -> Self {
        let UpdateClientRequestWithId(
            client_id,
            ClientRequest {
                name,
                contact_name,
                contact_email,
                contact_phone,
                address,
            },
        ) = value;
        UpdateClient {
            client_id,
            name,
            contact_name,
            contact_email,
            contact_phone,
            address,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsResponse {
    pub items: Vec<ClientResponse>,
}

impl From<Vec<Client>> for ClientsResponse {
    fn from(value: Vec<Client>) -> Self {
        Self {
            items: value.into_iter().map(ClientResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: ClientId,
    pub name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub address: Option<String>,
}

impl From<Client> for ClientResponse {
    fn from(value: Client) -> Self {
        let Client {
            client_id,
            name,
            contact_name,
            contact_email,
            contact_phone,
            address,
        } = value;
        Self {
            id: client_id,
            name,
            contact_name,
            contact_email,
            contact_phone,
            address,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ClientRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn empty_email_is_accepted_as_absent() {
        let req = parse(r#"{"name": "Alpha Events", "contactEmail": ""}"#);
        assert!(req.validate(&()).is_ok());
        assert_eq!(req.contact_email, None);
    }

    #[test]
    fn invalid_email_and_empty_name_are_rejected() {
        let req = parse(r#"{"name": "Alpha Events", "contactEmail": "not-an-email"}"#);
        assert!(req.validate(&()).is_err());

        let req = parse(r#"{"name": ""}"#);
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn blank_and_oversized_names_are_rejected() {
        let req = parse(r#"{"name": "   "}"#);
        assert_eq!(req.name, "");
        assert!(req.validate(&()).is_err());

        let json = format!(r#"{{"name": "{}"}}"#, "a".repeat(256));
        assert!(parse(&json).validate(&()).is_err());

        let json = format!(r#"{{"name": "{}"}}"#, "a".repeat(255));
        assert!(parse(&json).validate(&()).is_ok());

        let json = format!(
            r#"{{"name": "Alpha Events", "contactPhone": "{}"}}"#,
            "9".repeat(65)
        );
        assert!(parse(&json).validate(&()).is_err());
    }

    #[test]
    fn update_request_carries_the_path_id() {
        let client_id = ClientId::new();
        let req = parse(r#"{"name": "Alpha Events", "contactPhone": "+51 1 234 5678"}"#);
        let event: UpdateClient = UpdateClientRequestWithId::new(client_id, req).into();
        assert_eq!(event.client_id, client_id);
        assert_eq!(event.contact_phone.as_deref(), Some("+51 1 234 5678"));
    }
}
