// src/core/webdriver.rs

// Minimal blocking W3C WebDriver client (geckodriver / chromedriver).
// Covers only what the scraper needs: navigate, find, type, click, read text, quit.

use reqwest::blocking::{Client, Response};
use reqwest::Method;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::browser::{Browser, ElementRef, Locator};
use crate::config::options::{BrowserKind, BrowserOptions};
use crate::error::DriverError;

#[derive(Deserialize)]
struct Envelope<T> {
    value: T,
}

#[derive(Deserialize)]
struct NewSession {
    #[serde(rename = "sessionId")]
    session_id: String,
}

#[derive(Deserialize)]
struct WireError {
    error: String,
    #[serde(default)]
    message: String,
}

#[derive(Deserialize)]
struct WireElement {
    #[serde(rename = "element-6066-11e4-a52e-4f735466cecf")]
    id: String,
}

pub struct WebDriver {
    http: Client,
    base: String,
    session_id: String,
}

impl WebDriver {
    /// Start a new browser session on the WebDriver endpoint.
    pub fn connect(opts: &BrowserOptions) -> Result<Self, DriverError> {
        let http = Client::builder().timeout(opts.timeout).build()?;
        let base = opts.webdriver_url.trim_end_matches('/').to_string();

        info!("Starting {:?} session via {}", opts.kind, base);
        let resp = http
            .post(format!("{base}/session"))
            .json(&capabilities(opts))
            .send()?;
        let session: NewSession = decode(resp)?;
        debug!("WebDriver session {}", session.session_id);

        Ok(Self { http, base, session_id: session.session_id })
    }

    pub fn session_id(&self) -> &str { &self.session_id }

    fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, DriverError> {
        let url = format!("{}/session/{}{}", self.base, self.session_id, path);
        let mut req = self.http.request(method, url);
        if let Some(b) = body {
            req = req.json(&b);
        }
        decode(req.send()?)
    }
}

fn capabilities(opts: &BrowserOptions) -> Value {
    let always = match opts.kind {
        BrowserKind::Firefox => {
            let args: Vec<&str> = if opts.headless { vec!["-headless"] } else { vec![] };
            json!({ "browserName": "firefox", "moz:firefoxOptions": { "args": args } })
        }
        BrowserKind::Chrome => {
            let args: Vec<&str> = if opts.headless { vec!["--headless=new"] } else { vec![] };
            json!({ "browserName": "chrome", "goog:chromeOptions": { "args": args } })
        }
    };
    json!({ "capabilities": { "alwaysMatch": always } })
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, DriverError> {
    let status = resp.status();
    let text = resp.text()?;
    if status.is_success() {
        let env: Envelope<T> = serde_json::from_str(&text)?;
        return Ok(env.value);
    }
    match serde_json::from_str::<Envelope<WireError>>(&text) {
        Ok(env) => Err(map_wire_error(env.value)),
        Err(_) => Err(DriverError::MalformedResponse(format!("HTTP {status}: {text}"))),
    }
}

fn map_wire_error(e: WireError) -> DriverError {
    match e.error.as_str() {
        "no such element" => DriverError::NoSuchElement { locator: e.message },
        "stale element reference" => DriverError::StaleElement,
        _ => DriverError::Protocol { error: e.error, message: e.message },
    }
}

fn locator_body(locator: &Locator) -> Value {
    json!({ "using": locator.strategy(), "value": locator.value() })
}

impl Browser for WebDriver {
    fn goto(&mut self, url: &str) -> Result<(), DriverError> {
        debug!("GET {url}");
        let _: Value = self.call(Method::POST, "/url", Some(json!({ "url": url })))?;
        Ok(())
    }

    fn find(&mut self, locator: &Locator) -> Result<ElementRef, DriverError> {
        let found: Result<WireElement, _> =
            self.call(Method::POST, "/element", Some(locator_body(locator)));
        match found {
            Ok(el) => Ok(ElementRef(el.id)),
            // put the locator into the message; the driver's own text is less useful
            Err(DriverError::NoSuchElement { .. }) => {
                Err(DriverError::NoSuchElement { locator: locator.to_string() })
            }
            Err(e) => Err(e),
        }
    }

    fn find_all(&mut self, locator: &Locator) -> Result<Vec<ElementRef>, DriverError> {
        let els: Vec<WireElement> =
            self.call(Method::POST, "/elements", Some(locator_body(locator)))?;
        Ok(els.into_iter().map(|e| ElementRef(e.id)).collect())
    }

    fn send_keys(&mut self, element: &ElementRef, text: &str) -> Result<(), DriverError> {
        let path = format!("/element/{}/value", element.0);
        let _: Value = self.call(Method::POST, &path, Some(json!({ "text": text })))?;
        Ok(())
    }

    fn click(&mut self, element: &ElementRef) -> Result<(), DriverError> {
        let path = format!("/element/{}/click", element.0);
        let _: Value = self.call(Method::POST, &path, Some(json!({})))?;
        Ok(())
    }

    fn text(&mut self, element: &ElementRef) -> Result<String, DriverError> {
        let path = format!("/element/{}/text", element.0);
        self.call(Method::GET, &path, None)
    }

    fn quit(&mut self) -> Result<(), DriverError> {
        info!("Ending WebDriver session {}", self.session_id);
        let _: Value = self.call(Method::DELETE, "", None)?;
        Ok(())
    }
}
