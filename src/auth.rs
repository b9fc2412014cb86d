use anyhow::{anyhow, bail, Context};
use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig},
        DecodePaddingMode,
    },
    Engine as _,
};
use dioxus_logger::tracing::debug;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::TOKEN_KEY;

/// base64url as found in JWT segments, padded or not.
const SEGMENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The part of the session token payload the client reads. Other claims are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub email: String,
}

/// Key-value slot holding the session token.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str) -> anyhow::Result<()>;
    fn remove(&self) -> anyhow::Result<()>;
}

/// Browser local storage, under [`TOKEN_KEY`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> anyhow::Result<web_sys::Storage> {
        web_sys::window()
            .ok_or(anyhow!("failed to get window"))?
            .local_storage()
            .map_err(|_| anyhow!("failed to get local storage"))?
            .ok_or(anyhow!("local storage unavailable"))
    }
}

impl TokenStore for LocalStorage {
    fn get(&self) -> Option<String> {
        Self::storage().ok()?.get_item(TOKEN_KEY).ok()?
    }

    fn set(&self, token: &str) -> anyhow::Result<()> {
        Self::storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| anyhow!("failed to store token"))
    }

    fn remove(&self) -> anyhow::Result<()> {
        Self::storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|_| anyhow!("failed to remove token"))
    }
}

fn segment(part: &str) -> anyhow::Result<Map<String, Value>> {
    let raw = SEGMENT.decode(part)?;

    Ok(serde_json::from_slice(&raw)?)
}

fn decode_claims(token: &str) -> anyhow::Result<Claims> {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(_signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        bail!("expected three segments");
    };

    segment(header).context("header")?;
    let payload = segment(payload).context("payload")?;

    Ok(serde_json::from_value(Value::Object(payload))?)
}

/// Structural decode only: the signature, the algorithm and every claim but
/// `email` are left unchecked. Unsigned tokens are accepted.
pub fn decode(token: &str) -> Option<Claims> {
    match decode_claims(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            debug!("discarding stored token: {:#}", e);

            None
        }
    }
}

/// Email of the logged in user, `None` when the stored token is absent or malformed.
pub fn is_logged(store: &impl TokenStore) -> Option<String> {
    let token = store.get()?;
    let claims = decode(&token)?;

    match claims.email.is_empty() {
        true => None,
        false => Some(claims.email),
    }
}

/// Drops the stored token. Fails when a session can still be read afterwards.
pub fn logout(store: &impl TokenStore) -> anyhow::Result<()> {
    store.remove()?;

    match is_logged(store) {
        Some(email) => Err(anyhow!("session for {} is still stored", email)),
        None => Ok(()),
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use base64::Engine as _;
    use jsonwebtoken::{EncodingKey, Header};
    use std::cell::RefCell;

    #[derive(Default)]
    pub struct MemoryStore(RefCell<Option<String>>);

    impl MemoryStore {
        pub fn with(token: &str) -> Self {
            Self(RefCell::new(Some(token.to_string())))
        }
    }

    impl TokenStore for MemoryStore {
        fn get(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn set(&self, token: &str) -> anyhow::Result<()> {
            self.0.replace(Some(token.to_string()));
            Ok(())
        }

        fn remove(&self) -> anyhow::Result<()> {
            self.0.replace(None);
            Ok(())
        }
    }

    /// Store whose `remove` reports success but keeps the token.
    struct StuckStore(String);

    impl TokenStore for StuckStore {
        fn get(&self) -> Option<String> {
            Some(self.0.clone())
        }

        fn set(&self, _token: &str) -> anyhow::Result<()> {
            Ok(())
        }

        fn remove(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    /// Store that cannot be written to.
    struct ReadOnlyStore(String);

    impl TokenStore for ReadOnlyStore {
        fn get(&self) -> Option<String> {
            Some(self.0.clone())
        }

        fn set(&self, _token: &str) -> anyhow::Result<()> {
            Err(anyhow!("failed to store token"))
        }

        fn remove(&self) -> anyhow::Result<()> {
            Err(anyhow!("failed to remove token"))
        }
    }

    fn signed(payload: serde_json::Value) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            &payload,
            &EncodingKey::from_secret(b"server-side-key"),
        )
        .unwrap()
    }

    pub fn token_for(email: &str) -> String {
        signed(serde_json::json!({ "exp": 4_102_444_800_i64, "email": email }))
    }

    #[test]
    fn no_token_is_logged_out() {
        assert_eq!(is_logged(&MemoryStore::default()), None);
    }

    #[test]
    fn token_with_email_returns_email() {
        let store = MemoryStore::with(&token_for("ana@example.com"));

        assert_eq!(is_logged(&store), Some("ana@example.com".to_string()));
    }

    #[test]
    fn signature_is_not_verified() {
        let token = token_for("ana@example.com");
        let (header_payload, _) = token.rsplit_once('.').unwrap();
        let forged = format!("{}.AAAA", header_payload);

        assert_eq!(
            is_logged(&MemoryStore::with(&forged)),
            Some("ana@example.com".to_string())
        );
    }

    #[test]
    fn expired_token_still_decodes() {
        let token = signed(serde_json::json!({ "exp": 1, "email": "old@example.com" }));

        assert_eq!(
            is_logged(&MemoryStore::with(&token)),
            Some("old@example.com".to_string())
        );
    }

    #[test]
    fn malformed_token_is_logged_out() {
        for token in ["", "garbage", "a.b.c", "eyJhbGciOiJIUzI1NiJ9.bm90IGpzb24.sig"] {
            assert_eq!(is_logged(&MemoryStore::with(token)), None, "{token}");
        }
    }

    #[test]
    fn token_without_email_is_logged_out() {
        let token = signed(serde_json::json!({ "exp": 4_102_444_800_i64 }));

        assert!(decode(&token).is_some());
        assert_eq!(is_logged(&MemoryStore::with(&token)), None);
    }

    #[test]
    fn non_object_payload_is_logged_out() {
        let token = signed(serde_json::json!(["ana@example.com"]));

        assert_eq!(is_logged(&MemoryStore::with(&token)), None);
    }

    #[test]
    fn removing_token_logs_out() {
        let store = MemoryStore::with(&token_for("ana@example.com"));
        store.remove().unwrap();

        assert_eq!(is_logged(&store), None);
    }

    #[test]
    fn other_claims_are_not_inspected() {
        let payloads = [
            serde_json::json!({ "email": "ana@example.com", "exp": "soon" }),
            serde_json::json!({ "email": "ana@example.com", "exp": 1.7e9, "nbf": null }),
            serde_json::json!({ "email": "ana@example.com", "aud": ["a", "b"], "iat": {} }),
        ];

        for payload in payloads {
            let token = signed(payload.clone());

            assert_eq!(
                is_logged(&MemoryStore::with(&token)),
                Some("ana@example.com".to_string()),
                "{payload}"
            );
        }
    }

    #[test]
    fn unsigned_token_decodes() {
        let header = SEGMENT.encode(r#"{"alg":"none","typ":"JWT"}"#);
        let payload = SEGMENT.encode(r#"{"email":"ana@example.com"}"#);
        let token = format!("{}.{}.", header, payload);

        assert_eq!(
            is_logged(&MemoryStore::with(&token)),
            Some("ana@example.com".to_string())
        );
    }

    #[test]
    fn padded_segments_decode() {
        let padded = base64::engine::general_purpose::URL_SAFE;
        let token = format!(
            "{}.{}.sig",
            padded.encode(r#"{"alg":"HS256"}"#),
            padded.encode(r#"{"email":"ana@example.com"}"#)
        );

        assert_eq!(decode(&token).map(|c| c.email).as_deref(), Some("ana@example.com"));
    }

    #[test]
    fn header_must_be_an_object() {
        let payload = SEGMENT.encode(r#"{"email":"ana@example.com"}"#);

        for header in ["", "bm9wZQ", "WzFd"] {
            let token = format!("{}.{}.sig", header, payload);
            assert_eq!(decode(&token), None, "{header}");
        }
    }

    #[test]
    fn extra_segments_are_malformed() {
        let token = format!("{}.extra", token_for("ana@example.com"));

        assert_eq!(is_logged(&MemoryStore::with(&token)), None);
    }

    #[test]
    fn logout_clears_session() {
        let store = MemoryStore::with(&token_for("ana@example.com"));

        assert!(logout(&store).is_ok());
        assert_eq!(is_logged(&store), None);
    }

    #[test]
    fn logout_without_session_is_ok() {
        assert!(logout(&MemoryStore::default()).is_ok());
    }

    #[test]
    fn logout_fails_when_token_survives() {
        let token = token_for("ana@example.com");

        assert!(logout(&StuckStore(token.clone())).is_err());

        let err = logout(&ReadOnlyStore(token)).unwrap_err();
        assert_eq!(err.to_string(), "failed to remove token");
    }
}
