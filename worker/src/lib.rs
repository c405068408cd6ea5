//! Hint proxy: relays dictionary lookups so the browser can read them cross-origin.

use hangman_protocol as protocol;
use worker::*;

pub use config::*;
pub use error::*;

mod config;
mod error;

const ALLOW_ORIGIN: &str = "*";

#[derive(Debug, PartialEq, Eq)]
enum Route<'a> {
    Preflight,
    Hint(&'a str),
    BadTerm,
    NotFound,
    MethodNotAllowed,
}

fn route<'a>(method: &Method, path: &'a str) -> Route<'a> {
    if !path.starts_with(protocol::HINT_ROUTE_PREFIX) {
        return Route::NotFound;
    }

    match method {
        Method::Options => Route::Preflight,
        Method::Get => protocol::parse_hint_path(path).map_or(Route::BadTerm, Route::Hint),
        _ => Route::MethodNotAllowed,
    }
}

fn cors_headers() -> Result<Headers> {
    let headers = Headers::new();
    headers.set("Access-Control-Allow-Origin", ALLOW_ORIGIN)?;
    headers.set("Access-Control-Allow-Methods", "GET, OPTIONS")?;
    Ok(headers)
}

fn with_cors(mut response: Response) -> Result<Response> {
    let headers = response.headers_mut();
    for (name, value) in cors_headers()?.entries() {
        headers.set(&name, &value)?;
    }
    Ok(response)
}

async fn lookup(config: &ProxyConfig, term: &str) -> std::result::Result<Response, ProxyError> {
    let headers = Headers::new();
    headers.set("app_id", &config.app_id)?;
    headers.set("app_key", &config.app_key)?;

    let mut init = RequestInit::new();
    init.with_method(Method::Get).with_headers(headers);

    let request = Request::new_with_init(&config.entry_url(term), &init)?;
    let mut upstream = Fetch::Request(request).send().await?;

    let status = upstream.status_code();
    if !(200..300).contains(&status) {
        return Err(ProxyError::Upstream(status));
    }

    let content_type = upstream
        .headers()
        .get("content-type")?
        .unwrap_or_else(|| "application/json".to_string());
    let body = upstream.bytes().await?;

    let headers = cors_headers()?;
    headers.set("content-type", &content_type)?;
    Ok(Response::from_bytes(body)?
        .with_status(status)
        .with_headers(headers))
}

async fn hint(env: &Env, term: &str) -> Result<Response> {
    let outcome = match ProxyConfig::from_env(env) {
        Ok(config) => lookup(&config, term).await,
        Err(err) => Err(err),
    };

    match outcome {
        Ok(response) => {
            log::debug!("hint for {:?} relayed", term);
            Ok(response)
        }
        Err(err) => {
            log::error!("Error: {}", err);
            with_cors(Response::error(err.public_message(), err.status_code())?)
        }
    }
}

#[event(start)]
fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("logger already initialized");
    }
}

#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    let path = req.path();
    log::debug!("{:?} {}", req.method(), path);

    match route(&req.method(), &path) {
        Route::Preflight => with_cors(Response::empty()?.with_status(204)),
        Route::Hint(term) => hint(&env, term).await,
        Route::BadTerm => with_cors(Response::error("Bad Request", 400)?),
        Route::NotFound => Response::error("Not Found", 404),
        Route::MethodNotAllowed => with_cors(Response::error("Method Not Allowed", 405)?),
    }
}
