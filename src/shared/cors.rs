use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

const PREFLIGHT_MAX_AGE_SECS: usize = 3600;

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Comma-separated list. Blank or `*` allows every origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| o.trim_end_matches('/').to_string())
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }

    /// Reads `ALLOWED_ORIGINS`; unset means any origin.
    pub fn from_env() -> Self {
        env::var("ALLOWED_ORIGINS")
            .map(|raw| Self::parse(&raw))
            .unwrap_or(AllowedOrigins::Any)
    }

    pub fn to_cors(&self) -> Cors {
        let cors = Cors::default()
            .allowed_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allowed_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
            .max_age(PREFLIGHT_MAX_AGE_SECS);

        match self {
            AllowedOrigins::Any => cors.allow_any_origin(),
            AllowedOrigins::List(origins) => origins
                .iter()
                .fold(cors, |cors, origin| cors.allowed_origin(origin)),
        }
    }
}
