use anyhow::Result;
use reqwest::Client;
use reqwest::header::COOKIE;

use crate::error::StartError;

const BASE_URL: &str = "https://adventofcode.com";

pub struct AocClient {
    http: Client,
    session: String,
    base_url: String,
}

impl AocClient {
    pub fn new(session: String) -> Result<Self> {
        Self::with_base_url(session, BASE_URL.to_string())
    }

    /// Point the client at a different host. Tests use this to talk to a
    /// local stub server.
    pub fn with_base_url(session: String, base_url: String) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("aoc-start/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            session,
            base_url,
        })
    }

    /// The puzzle's human-facing page.
    pub fn puzzle_url(&self, year: i32, day: u32) -> String {
        format!("{}/{year}/day/{day}", self.base_url)
    }

    fn input_request(&self, year: i32, day: u32) -> Result<reqwest::Request> {
        let req = self
            .http
            .get(format!("{}/input", self.puzzle_url(year, day)))
            .header(COOKIE, format!("session={}", self.session))
            .build()?;
        Ok(req)
    }

    /// Download the puzzle input.
    ///
    /// A non-success status aborts with the response body as the message;
    /// that is where the site puts its diagnostics ("Please log in…",
    /// "Please don't repeatedly request this endpoint…").
    pub async fn fetch_input(&self, year: i32, day: u32) -> Result<String> {
        let req = self.input_request(year, day)?;
        let resp = self.http.execute(req).await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(StartError::Http {
                status: status.as_u16(),
                message: message.trim().to_string(),
            }
            .into());
        }
        Ok(resp.text().await?)
    }
}
