use serde::{Deserialize, Serialize};

/// A JSON Web Key as published by the identity service.
///
/// Carried through untouched; nothing here validates key material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    #[serde(default)]
    pub kty: String,
    #[serde(default)]
    pub e: String,
    #[serde(default, rename = "use")]
    pub key_use: String,
    #[serde(default)]
    pub kid: String,
    #[serde(default)]
    pub alg: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub n: String,
}

/// Body of the bulk `/token_keys` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}
