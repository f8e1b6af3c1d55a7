//! OAuth1.0a request signing.
//!
//! Pure signing primitive: given the long-lived credentials and one
//! request's method, URL and parameters, produce the `Authorization`
//! header for that single request. Signatures are single-use by
//! construction; nothing here is cached or reused across calls.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;
use herald_error::{ConfigError, HeraldResult};
use hmac::{Hmac, Mac};
use rand::{Rng, distributions::Alphanumeric};
use sha1::Sha1;
use std::collections::BTreeMap;

type HmacSha1 = Hmac<Sha1>;

/// Signature method fixed by the platform profile.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// Protocol version parameter value.
pub const OAUTH_VERSION: &str = "1.0";

/// Length of the random alphanumeric nonce.
const NONCE_LENGTH: usize = 16;

/// Long-lived OAuth1.0a credentials, loaded once at process start and
/// immutable for the process lifetime.
#[derive(Clone)]
pub struct OauthCredentials {
    consumer_key: String,
    consumer_secret: String,
    access_token: String,
    access_token_secret: String,
}

impl OauthCredentials {
    /// Create credentials from explicit values.
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Reads `TWITTER_CONSUMER_KEY`, `TWITTER_CONSUMER_SECRET`,
    /// `TWITTER_ACCESS_TOKEN` and `TWITTER_ACCESS_TOKEN_SECRET`,
    /// trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] naming the first absent variable. This
    /// runs before any network call is attempted: a request is never
    /// sent with a malformed or absent credential.
    pub fn from_env() -> HeraldResult<Self> {
        Ok(Self {
            consumer_key: required_var("TWITTER_CONSUMER_KEY")?,
            consumer_secret: required_var("TWITTER_CONSUMER_SECRET")?,
            access_token: required_var("TWITTER_ACCESS_TOKEN")?,
            access_token_secret: required_var("TWITTER_ACCESS_TOKEN_SECRET")?,
        })
    }

    /// The public consumer key.
    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    /// The public access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Build a fresh `Authorization` header for one outbound request.
    ///
    /// A new nonce and timestamp are generated per invocation, so two
    /// calls with identical inputs produce different headers.
    pub fn sign_request(
        &self,
        method: &str,
        url: &str,
        request_params: &BTreeMap<String, String>,
    ) -> String {
        authorization_header(
            self,
            method,
            url,
            request_params,
            &nonce(),
            Utc::now().timestamp(),
        )
    }
}

impl std::fmt::Debug for OauthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OauthCredentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[redacted]")
            .field("access_token", &self.access_token)
            .field("access_token_secret", &"[redacted]")
            .finish()
    }
}

fn required_var(name: &str) -> HeraldResult<String> {
    let value = std::env::var(name).unwrap_or_default();
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::new(format!("Missing {} environment variable", name)).into());
    }
    Ok(value.to_string())
}

/// Percent-encode per the OAuth reserved-character rules.
///
/// Unreserved characters (ALPHA, DIGIT, `-`, `.`, `_`, `~`) pass
/// through; every other byte becomes `%XX` with uppercase hex.
pub fn percent_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Build the deterministic `Authorization` header for one request.
///
/// Exposed with explicit nonce and timestamp so the computation stays
/// a pure function of its inputs.
pub fn authorization_header(
    credentials: &OauthCredentials,
    method: &str,
    url: &str,
    request_params: &BTreeMap<String, String>,
    nonce: &str,
    timestamp: i64,
) -> String {
    let mut params = request_params.clone();
    params.insert(
        "oauth_consumer_key".to_string(),
        credentials.consumer_key.clone(),
    );
    params.insert("oauth_nonce".to_string(), nonce.to_string());
    params.insert(
        "oauth_signature_method".to_string(),
        SIGNATURE_METHOD.to_string(),
    );
    params.insert("oauth_timestamp".to_string(), timestamp.to_string());
    params.insert("oauth_token".to_string(), credentials.access_token.clone());
    params.insert("oauth_version".to_string(), OAUTH_VERSION.to_string());

    let base = signature_base_string(method, url, &params);
    let signature = sign(
        &base,
        &credentials.consumer_secret,
        &credentials.access_token_secret,
    );

    // The header carries only the oauth_* parameters; request
    // parameters travel in the body or query string.
    let mut header_params: Vec<(String, String)> = params
        .into_iter()
        .filter(|(key, _)| key.starts_with("oauth_"))
        .map(|(key, value)| (percent_encode(&key), percent_encode(&value)))
        .collect();
    header_params.push((
        percent_encode("oauth_signature"),
        percent_encode(&signature),
    ));
    header_params.sort();

    let rendered = header_params
        .iter()
        .map(|(key, value)| format!("{}=\"{}\"", key, value))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OAuth {}", rendered)
}

/// Canonical signature base string: `METHOD&enc(url)&enc(params)`.
///
/// Parameters are individually percent-encoded, sorted by encoded key
/// (then encoded value), and joined as `key=value` pairs with `&`.
fn signature_base_string(method: &str, url: &str, params: &BTreeMap<String, String>) -> String {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(key, value)| (percent_encode(key), percent_encode(value)))
        .collect();
    pairs.sort();

    let param_string = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&param_string)
    )
}

/// HMAC-SHA1 over the base string, base64-encoded.
fn sign(base_string: &str, consumer_secret: &str, token_secret: &str) -> String {
    let signing_key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac =
        HmacSha1::new_from_slice(signing_key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(base_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Random alphanumeric nonce, fresh per request.
fn nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}
