//! Wire DTOs for the remote user-directory API.
//!
//! DESIGN
//! ======
//! These types mirror the reqres-style JSON payloads so serde decoding stays
//! lossless. Pagination counters are decoded leniently because some mock
//! backends emit them as floats.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A user record owned by the remote API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Externally assigned unique identifier.
    pub id: u64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
}

impl User {
    /// `"{first_name} {last_name}"`, the text searched by the directory filter.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Email + password submitted to `POST /login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful `POST /login` response body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// One page of `GET /users?page=N`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    /// Records on this page, in server order.
    pub data: Vec<User>,
    /// 1-based page number the server actually returned.
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub page: u32,
    #[serde(default, deserialize_with = "deserialize_u32_from_number")]
    pub per_page: u32,
    #[serde(default, deserialize_with = "deserialize_u32_from_number")]
    pub total: u32,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub total_pages: u32,
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_u64() {
                return u32::try_from(int).map_err(|_| D::Error::custom(format!("value {int} out of range for u32")));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= f64::from(u32::MAX)
            {
                return Ok(float as u32);
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
