//! The `User` entity and its JSON codec.

use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted user. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Request body for create and update. Missing or `null` fields are empty strings; unknown
/// fields, including `id`, are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserInput {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
}

fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(d).map(Option::unwrap_or_default)
}

impl User {
    pub fn from_input(id: i32, input: UserInput) -> Self {
        User {
            id,
            name: input.name,
            email: input.email,
        }
    }
}

/// Decode a request body. Anything but a JSON object with string fields is a bad request.
pub fn decode(bytes: &[u8]) -> Result<UserInput, AppError> {
    serde_json::from_slice(bytes).map_err(|e| AppError::BadRequest(format!("invalid user body: {}", e)))
}

/// Encode a user, a list of users, or any other response value.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, AppError> {
    Ok(serde_json::to_vec(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_round_trips() {
        let user = User {
            id: 3,
            name: "Ann".into(),
            email: "a@x.com".into(),
        };
        let bytes = encode(&user).unwrap();
        let back: User = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, user);

        let input = decode(&bytes).unwrap();
        assert_eq!(User::from_input(user.id, input), user);
    }

    #[test]
    fn decode_is_lenient_about_fields() {
        let input = decode(br#"{"email":"b@x.com","id":99,"extra":true}"#).unwrap();
        assert_eq!(input.name, "");
        assert_eq!(input.email, "b@x.com");

        let input = decode(b"{}").unwrap();
        assert_eq!(input, UserInput::default());

        let input = decode(br#"{"name":null,"email":"a@x.com"}"#).unwrap();
        assert_eq!(input.name, "");
        assert_eq!(input.email, "a@x.com");
    }

    #[test]
    fn decode_rejects_malformed_input() {
        assert!(matches!(decode(b"not json"), Err(AppError::BadRequest(_))));
        assert!(matches!(decode(b"[1,2]"), Err(AppError::BadRequest(_))));
        assert!(matches!(decode(br#"{"name":5}"#), Err(AppError::BadRequest(_))));
        assert!(matches!(decode(b""), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn encode_list_and_message() {
        let users = vec![User::from_input(1, UserInput { name: "A".into(), email: "".into() })];
        assert_eq!(encode(&users).unwrap(), br#"[{"id":1,"name":"A","email":""}]"#.to_vec());
        assert_eq!(encode(&Vec::<User>::new()).unwrap(), b"[]".to_vec());
        assert_eq!(encode("User deleted").unwrap(), br#""User deleted""#.to_vec());
    }
}
