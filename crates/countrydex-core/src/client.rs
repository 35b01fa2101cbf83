// crates/countrydex-core/src/client.rs
#![cfg(feature = "http")]

use crate::config::Config;
use crate::error::{CountryDexError, Result};
use crate::model::convert::from_raw_list;
use crate::model::Country;
use crate::raw::CountriesRaw;
use crate::text::parse_code;
use crate::traits::CountrySource;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

/// Fields requested from `/all`. The endpoint refuses unfiltered requests and
/// accepts at most ten fields, so `subregion` and `capital` are left out:
/// records from the cached catalog never carry them, only single lookups do.
pub const ALL_FIELDS: &str =
    "name,cca3,cca2,population,area,languages,borders,flags,region,translations";

/// Blocking client for the REST Countries v3.1 API.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    http: Client,
    base_url: String,
}

impl RestCountriesClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("countrydex/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url.clone(), config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `url` and decode a JSON array of countries.
    ///
    /// `Ok(None)` on 404 so single lookups can report "no record"; every
    /// other non-2xx status is a failure.
    fn get_list(&self, url: &str, query: &[(&str, &str)]) -> Result<Option<Vec<Country>>> {
        debug!(url, ?query, "GET");
        let response = self.http.get(url).query(query).send()?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status()?;

        let raw: CountriesRaw = response
            .json()
            .map_err(|e| CountryDexError::DataUnavailable(format!("malformed body: {e}")))?;
        Ok(Some(from_raw_list(raw)))
    }
}

impl CountrySource for RestCountriesClient {
    fn fetch_all(&self) -> Result<Vec<Country>> {
        let url = format!("{}/all", self.base_url);
        let countries = self
            .get_list(&url, &[("fields", ALL_FIELDS)])?
            .ok_or_else(|| CountryDexError::DataUnavailable(format!("{url} returned 404")))?;
        info!(count = countries.len(), "fetched country list");
        Ok(countries)
    }

    fn fetch_by_code(&self, code: &str) -> Result<Option<Country>> {
        let code = parse_code(code)?;
        let url = format!("{}/alpha/{}", self.base_url, code);
        Ok(self
            .get_list(&url, &[])?
            .and_then(|list| list.into_iter().next()))
    }

    fn fetch_by_codes(&self, codes: &[String]) -> Result<Vec<Country>> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }
        let codes = codes
            .iter()
            .map(|c| parse_code(c))
            .collect::<Result<Vec<_>>>()?;
        let url = format!("{}/alpha", self.base_url);
        let joined = codes.join(",");
        // A batch where no code is known comes back as 404.
        Ok(self
            .get_list(&url, &[("codes", joined.as_str())])?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// One-route HTTP server on a free local port answering every request
    /// with `status` and `body`. Returns its base URL.
    fn serve(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}")
    }

    fn client_for(base_url: &str) -> RestCountriesClient {
        RestCountriesClient::new(base_url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn single_lookup_404_is_no_record() {
        let client = client_for(&serve("404 Not Found", r#"{"status":404}"#));
        assert_eq!(client.fetch_by_code("XXX").unwrap(), None);
    }

    #[test]
    fn single_lookup_takes_first_record() {
        let client = client_for(&serve(
            "200 OK",
            r#"[{"name":{"common":"Spain"},"cca3":"ESP","population":47000000}]"#,
        ));
        let spain = client.fetch_by_code("esp").unwrap().unwrap();
        assert_eq!(spain.code, "ESP");
        assert_eq!(spain.population, 47_000_000);
    }

    #[test]
    fn malformed_body_is_data_unavailable() {
        let client = client_for(&serve("200 OK", "<html>not json</html>"));
        assert!(matches!(
            client.fetch_all(),
            Err(CountryDexError::DataUnavailable(msg)) if msg.contains("malformed body")
        ));
    }

    #[test]
    fn server_error_is_data_unavailable() {
        let client = client_for(&serve("500 Internal Server Error", "{}"));
        assert!(matches!(
            client.fetch_all(),
            Err(CountryDexError::DataUnavailable(_))
        ));
        assert!(matches!(
            client.fetch_by_code("FRA"),
            Err(CountryDexError::DataUnavailable(_))
        ));
    }

    #[test]
    fn batch_of_unknown_codes_is_empty() {
        let client = client_for(&serve("404 Not Found", r#"{"status":404}"#));
        let codes = vec!["XXA".to_string(), "XXB".to_string()];
        assert!(client.fetch_by_codes(&codes).unwrap().is_empty());
    }

    #[test]
    fn invalid_codes_never_reach_the_server() {
        // Nothing listens on port 9; a request would be DataUnavailable.
        let client = client_for("http://127.0.0.1:9");
        assert!(matches!(
            client.fetch_by_code("../all"),
            Err(CountryDexError::InvalidCode(_))
        ));
        assert!(matches!(
            client.fetch_by_code("   "),
            Err(CountryDexError::InvalidCode(_))
        ));
        let codes = vec!["".to_string(), "FRA".to_string()];
        assert!(matches!(
            client.fetch_by_codes(&codes),
            Err(CountryDexError::InvalidCode(_))
        ));
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let client =
            RestCountriesClient::new("https://example.test/v3.1/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.base_url(), "https://example.test/v3.1");
    }

    #[test]
    fn all_fields_stay_within_api_limit() {
        assert!(ALL_FIELDS.split(',').count() <= 10);
    }

    #[test]
    fn unreachable_host_is_data_unavailable() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client =
            RestCountriesClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        assert!(matches!(
            client.fetch_all(),
            Err(CountryDexError::DataUnavailable(_))
        ));
    }
}
