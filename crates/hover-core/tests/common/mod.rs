//! Test doubles and common utilities for contract tests
//!
//! The Hover API is stubbed with `httpmock`; the public IP service is
//! replaced by [`FixedIpSource`].

#![allow(dead_code)]

use hover_core::error::Result;
use hover_core::traits::IpSource;
use hover_core::{ClientSettings, Credentials, HoverClient};
use httpmock::prelude::*;
use serde_json::{Value, json};
use std::net::IpAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "correct horse";
pub const TOKEN: &str = "tok-5f2c9a";

/// An IpSource that always answers with the same address
pub struct FixedIpSource {
    ip: IpAddr,
    /// Call counter for current()
    call_count: Arc<AtomicUsize>,
}

impl FixedIpSource {
    pub fn new(ip: IpAddr) -> Self {
        Self {
            ip,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times current() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl IpSource for FixedIpSource {
    async fn current(&self) -> Result<IpAddr> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.ip)
    }
}

/// Client settings pointing at the stub server
pub fn settings(server: &MockServer) -> ClientSettings {
    ClientSettings::new(server.url("/api"))
}

pub fn credentials() -> Credentials {
    Credentials::new(USERNAME, PASSWORD)
}

/// Stub a successful sign-in that issues [`TOKEN`]
pub async fn mock_login(server: &MockServer) -> httpmock::Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/login")
                .query_param("username", USERNAME)
                .query_param("password", PASSWORD);
            then.status(200)
                .header("Set-Cookie", format!("hoverauth={}; Path=/; HttpOnly", TOKEN))
                .json_body(json!({ "succeeded": true }));
        })
        .await
}

/// Sign in against the stub server
pub async fn signed_in_client(server: &MockServer) -> HoverClient {
    mock_login(server).await;
    HoverClient::authenticate(&settings(server), &credentials())
        .await
        .expect("stub sign-in succeeds")
}

/// Header value carrying the stub session
pub fn session_cookie() -> String {
    format!("hoverauth={}", TOKEN)
}

pub fn record_json(id: &str, name: &str, record_type: &str, content: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": record_type,
        "content": content,
        "ttl": 900,
        "is_default": false,
        "can_revert": false,
    })
}

pub fn domain_json(id: &str, name: &str, entries: Vec<Value>) -> Value {
    json!({
        "id": id,
        "domain_name": name,
        "active": true,
        "entries": entries,
    })
}
