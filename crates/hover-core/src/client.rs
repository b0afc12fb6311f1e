// # Hover Session Client
//
// Owns authentication and raw request dispatch against the Hover API.
//
// ## Behavior
//
// - Signs in once with username/password and keeps the `hoverauth` cookie
// - Attaches the cookie to every subsequent call
// - Treats a non-2xx status as a transport failure
// - Treats a body without `"succeeded": true` as a logical failure, even on 200
// - Returns `None` for empty bodies (DELETE and some PUTs)
// - No retries, no caching, one request at a time
//
// ## Security
//
// - The password and session token NEVER appear in logs or Debug output
//
// ## API Reference
//
// - Sign in: POST `/login?username=...&password=...`
// - Resources: `domains`, `domains/:id`, `domains/:id/dns`, `dns`, `dns/:id`

use crate::config::ClientSettings;
use crate::error::{Error, Result};
use crate::model::{Credentials, DnsRecord, Domain, DomainDetail, DomainList, NewRecord, Session};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Name of the session cookie issued at sign-in
pub const SESSION_COOKIE: &str = "hoverauth";

/// Name of the logical success flag in response bodies
const SUCCESS_FLAG: &str = "succeeded";

/// Authenticated Hover API client
pub struct HoverClient {
    /// HTTP client for API requests
    http: reqwest::Client,

    /// API base URL without trailing slash
    api_base: String,

    /// Session obtained at sign-in
    /// ⚠️ NEVER log this value
    session: Session,
}

// Custom Debug implementation that hides the session token
impl std::fmt::Debug for HoverClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoverClient")
            .field("api_base", &self.api_base)
            .field("session", &"<REDACTED>")
            .finish()
    }
}

impl HoverClient {
    /// Sign in and return a client bound to the new session
    ///
    /// Any failure (network error, rejected credentials, missing session
    /// cookie) is reported as [`Error::Authentication`], whose message is only
    /// "Authentication failed". The underlying reason is logged at debug level.
    ///
    /// # API Call
    ///
    /// ```http
    /// POST /login?username=...&password=...
    /// ```
    pub async fn authenticate(settings: &ClientSettings, credentials: &Credentials) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| Error::http("client setup", e))?;

        let api_base = settings.api_base.trim_end_matches('/').to_string();
        let url = format!("{}/login", api_base);

        tracing::debug!("Signing in to {} as {}", url, credentials.username);

        let response = http
            .post(&url)
            .query(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Sign-in request failed: {}", e);
                Error::auth(format!("sign-in request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Sign-in rejected with status {}", status);
            return Err(Error::auth(format!("sign-in returned HTTP status {}", status)));
        }

        let token = response
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                tracing::debug!("Sign-in response carried no {} cookie", SESSION_COOKIE);
                Error::auth(format!("no {} cookie in sign-in response", SESSION_COOKIE))
            })?;

        tracing::info!("Authenticated as {}", credentials.username);

        Ok(Self {
            http,
            api_base,
            session: Session::new(token),
        })
    }

    /// The session obtained at sign-in
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The API base URL this client talks to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Perform one API call
    ///
    /// # Parameters
    ///
    /// - `method`: GET, POST, PUT or DELETE
    /// - `resource`: path relative to the API base (e.g. "domains/dom123/dns")
    /// - `payload`: optional JSON body
    ///
    /// # Returns
    ///
    /// - `Ok(Some(body))`: decoded body with `"succeeded": true`
    /// - `Ok(None)`: empty body
    /// - `Err(Error::Transport)`: non-success HTTP status
    /// - `Err(Error::Api)`: undecodable body, or success flag absent or not true
    pub async fn call(
        &self,
        method: Method,
        resource: &str,
        payload: Option<&Value>,
    ) -> Result<Option<Value>> {
        let resource = resource.trim_start_matches('/');
        let url = format!("{}/{}", self.api_base, resource);
        let context = format!("{} {}", method, resource);

        tracing::debug!("API call: {}", context);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .header(
                reqwest::header::COOKIE,
                format!("{}={}", SESSION_COOKIE, self.session.token()),
            );

        if let Some(body) = payload {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::http(context.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} returned HTTP status {}", context, status);
            return Err(Error::transport(method.as_str(), resource, status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::http(context.clone(), e))?;

        if text.trim().is_empty() {
            return Ok(None);
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|e| Error::api(format!("response is not JSON: {}", e), Value::String(text)))?;

        ensure_succeeded(&body)?;

        Ok(Some(body))
    }

    /// GET a resource and decode it into a typed envelope
    pub async fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let body = self
            .call(Method::GET, resource, None)
            .await?
            .ok_or_else(|| Error::api(format!("empty response to GET {}", resource), Value::Null))?;

        serde_json::from_value(body.clone())
            .map_err(|e| Error::api(format!("unexpected response shape: {}", e), body))
    }

    /// List domains without their records (`GET domains`)
    pub async fn list_domains(&self) -> Result<Vec<Domain>> {
        Ok(self.get_json::<DomainList>("domains").await?.domains)
    }

    /// List every domain together with its records (`GET dns`)
    pub async fn list_dns(&self) -> Result<Vec<Domain>> {
        Ok(self.get_json::<DomainList>("dns").await?.domains)
    }

    /// Get one domain without records (`GET domains/{domain}`)
    ///
    /// `domain` may be the domain id or its name.
    pub async fn get_domain(&self, domain: &str) -> Result<Domain> {
        Ok(self
            .get_json::<DomainDetail>(&format!("domains/{}", domain))
            .await?
            .domain)
    }

    /// Get the records of one domain (`GET domains/{domain}/dns`)
    pub async fn get_domain_records(&self, domain: &str) -> Result<Vec<DnsRecord>> {
        let listing = self
            .get_json::<DomainList>(&format!("domains/{}/dns", domain))
            .await?;

        listing
            .domains
            .into_iter()
            .next()
            .map(|d| d.records)
            .ok_or_else(|| {
                Error::api(
                    format!("no domain in response to GET domains/{}/dns", domain),
                    Value::Null,
                )
            })
    }

    /// Create a record (`POST domains/{domain}/dns`)
    ///
    /// Returns the acknowledgment body, if any.
    pub async fn create_record(&self, domain: &str, record: &NewRecord) -> Result<Option<Value>> {
        let payload = serde_json::to_value(record)?;
        self.call(Method::POST, &format!("domains/{}/dns", domain), Some(&payload))
            .await
    }

    /// Update fields of a record (`PUT dns/{id}`)
    pub async fn update_record(&self, record_id: &str, fields: &Value) -> Result<Option<Value>> {
        self.call(Method::PUT, &format!("dns/{}", record_id), Some(fields))
            .await
    }

    /// Delete a record (`DELETE dns/{id}`)
    pub async fn delete_record(&self, record_id: &str) -> Result<Option<Value>> {
        self.call(Method::DELETE, &format!("dns/{}", record_id), None)
            .await
    }
}

/// Check the logical success flag of a decoded body
pub fn ensure_succeeded(body: &Value) -> Result<()> {
    match body.get(SUCCESS_FLAG) {
        Some(Value::Bool(true)) => Ok(()),
        Some(_) => Err(Error::api("succeeded flag is not true", body.clone())),
        None => Err(Error::api("succeeded flag missing", body.clone())),
    }
}
