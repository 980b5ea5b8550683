use serde::{Deserialize, Serialize};
use shared::error::AppError;
use std::str::FromStr;

macro_rules! define_id {
    ($id_type: ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
        #[serde(into = "String")]
        #[sqlx(transparent)]
        pub struct $id_type(uuid::Uuid);

        impl $id_type {
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn raw(self) -> uuid::Uuid {
                self.0
            }
        }

        impl Default for $id_type {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<uuid::Uuid> for $id_type {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl FromStr for $id_type {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(uuid::Uuid::parse_str(s)?))
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$id_type> for String {
            fn from(value: $id_type) -> Self {
                value.0.to_string()
            }
        }
    };
}

define_id!(UserId);
define_id!(ClientId);
define_id!(SpaceId);
define_id!(ServiceId);
define_id!(ReservationId);
define_id!(PaymentId);
define_id!(BookingRequestId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_parses_and_prints_the_same_uuid() {
        let raw = "6f1c0c3a-2d8e-4c55-9a4b-1f0f4a7f2b11";
        let id: ReservationId = raw.parse().unwrap();
        assert_eq!(id.to_string(), raw);
        assert_eq!(String::from(id), raw);
    }

    #[test]
    fn malformed_id_is_a_uuid_error() {
        let res = "not-a-uuid".parse::<ClientId>();
        assert!(matches!(res, Err(AppError::ConvertToUuidError(_))));
    }
}
