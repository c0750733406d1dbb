//! Mock AdGuard Home appliance for integration tests

#![allow(dead_code)]

use adguard_list_manager::config::Connection;
use adguard_list_manager::prompt::Prompt;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
pub const SESSION_COOKIE: &str = "agh_session=0123456789abcdef";

/// Mock appliance accepting `USERNAME`/`PASSWORD`
pub struct MockAppliance {
    pub server: MockServer,
}

impl MockAppliance {
    /// Start a server whose login endpoint accepts the test credentials once
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/control/login"))
            .and(body_json(json!({"name": USERNAME, "password": PASSWORD})))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", format!("{}; Path=/; HttpOnly", SESSION_COOKIE).as_str())
                    .set_body_string("OK"),
            )
            .expect(1)
            .mount(&server)
            .await;
        Self { server }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    pub fn url(&self, p: &str) -> String {
        format!("{}{}", self.base_url(), p)
    }

    pub fn connection(&self) -> Connection {
        let address = self.server.address();
        Connection {
            host: address.ip().to_string(),
            port: address.port(),
            username: USERNAME.to_string(),
            password: PASSWORD.into(),
        }
    }

    /// Serve a plain-text index body at `p`
    pub async fn serve_index(&self, p: &str, body: &str) {
        Mock::given(method("GET"))
            .and(path(p.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Expect exactly `times` add calls for `url`
    pub async fn expect_add(&self, url: &str, whitelist: bool, status: u16, times: u64) {
        Mock::given(method("POST"))
            .and(path("/control/filtering/add_url"))
            .and(body_json(json!({"name": url, "url": url, "whitelist": whitelist})))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Expect exactly `times` remove calls for `url`
    pub async fn expect_remove(&self, url: &str, whitelist: bool, times: u64) {
        Mock::given(method("POST"))
            .and(path("/control/filtering/remove_url"))
            .and(body_json(json!({"url": url, "whitelist": whitelist})))
            .respond_with(ResponseTemplate::new(200))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any add call arrives
    pub async fn forbid_add(&self) {
        Mock::given(method("POST"))
            .and(path("/control/filtering/add_url"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any remove call arrives
    pub async fn forbid_remove(&self) {
        Mock::given(method("POST"))
            .and(path("/control/filtering/remove_url"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn serve_status(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/control/filtering/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }
}

/// Prompt for runs that must never ask anything
pub struct NoPrompt;

impl Prompt for NoPrompt {
    fn ask(&self, label: &str) -> anyhow::Result<String> {
        anyhow::bail!("unexpected prompt: {}", label)
    }

    fn ask_secret(&self, label: &str) -> anyhow::Result<String> {
        anyhow::bail!("unexpected secret prompt: {}", label)
    }
}

/// Prompt answering every question with the same value
pub struct FixedPrompt(pub &'static str);

impl Prompt for FixedPrompt {
    fn ask(&self, _label: &str) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }

    fn ask_secret(&self, _label: &str) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}
