use serde::{Deserialize, Deserializer, Serialize};

/// A stored user record. `passwd` is the wire name for the password and is
/// kept in plaintext.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(rename = "passwd", deserialize_with = "null_as_empty")]
    pub password: String,
}

/// `null` binds like an absent field.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        User {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Copies every non-empty field of `incoming` over `self`.
    pub fn merge(&mut self, incoming: User) {
        if !incoming.email.is_empty() {
            self.email = incoming.email;
        }
        if !incoming.password.is_empty() {
            self.password = incoming.password;
        }
    }
}
