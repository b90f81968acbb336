use bytes::Bytes;
use chrono::NaiveDateTime;
use http_body_util::Full;
use hyper::{
    body::Incoming,
    header::{HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
    service::Service,
    Method, Request, Response, StatusCode,
};
use serde::Serialize;
use url_escape::decode;

use std::{collections::HashMap, future::Future, pin::Pin, str::FromStr};

use crate::{
    site::SiteState,
    timing::{
        evaluation_point::{day_name, EvaluationPoint},
        hours_display::hours_lines,
        local_now::local_now,
    },
    ISO_FORMAT,
};

use super::responses::{ErrorResponse, HeadlineResponse, HoursResponse, StatusResponse};

/// The Server
///
/// Serves the state the page glue renders: the open/closed pill, the weekly
/// hours list and the rotating headline. All endpoints are read only.
///
/// Implements hyper's `Service`, and is cloned into every connection.
#[derive(Clone)]
pub struct Server {
    state: SiteState,
}

impl Server {
    pub fn setup(state: SiteState) -> Self {
        Self { state }
    }

    /// Parses the query parameters and returns a `hashmap` of key pair values
    /// Returns `None` if the parameters are malformed
    fn parse_params(text: &str) -> Option<HashMap<String, String>> {
        let mut map: HashMap<String, String> = HashMap::new();
        for pairs in text.split('&') {
            let mut iterator = pairs.split('=');
            map.insert(
                iterator.next()?.to_string(),
                decode(iterator.next()?).to_string(),
            );
        }
        Some(map)
    }

    /// The wall clock time a request asks about.
    ///
    /// `at` (ISO 8601 local time, no offset) overrides the current time.
    fn requested_time(&self, query: Option<&str>) -> Result<NaiveDateTime, &'static str> {
        let Some(query) = query else {
            return Ok(local_now(self.state.timezone).naive_local());
        };
        let map = Self::parse_params(query).ok_or("Malformed Parameters.")?;
        match map.get("at") {
            None => Ok(local_now(self.state.timezone).naive_local()),
            Some(at) => NaiveDateTime::from_str(at).map_err(|_| "Malformed Date"),
        }
    }

    /// The /api/status API endpoint.
    ///
    /// Evaluates the schedule fresh on every call.
    fn status(&self, query: Option<&str>) -> Result<Response<Full<Bytes>>, hyper::Error> {
        let timestamp = match self.requested_time(query) {
            Ok(timestamp) => timestamp,
            Err(message) => return Self::bad_request(message),
        };
        let point = EvaluationPoint::from_naive(&timestamp);
        let open = self.state.schedule.is_open(point);

        Self::ok_data(StatusResponse {
            open,
            label: StatusResponse::label_for(open),
            day: day_name(point.day()),
            minute: point.minute(),
            timestamp: timestamp.format(ISO_FORMAT).to_string(),
        })
    }

    /// The /api/hours API endpoint.
    ///
    /// The whole week in display order, with the current day marked.
    fn hours(&self, query: Option<&str>) -> Result<Response<Full<Bytes>>, hyper::Error> {
        let timestamp = match self.requested_time(query) {
            Ok(timestamp) => timestamp,
            Err(message) => return Self::bad_request(message),
        };
        let today = EvaluationPoint::from_naive(&timestamp).day();
        let days = hours_lines(&self.state.schedule, self.state.display_start, today);
        Self::ok_data(HoursResponse { days })
    }

    /// The /api/headline API endpoint. 204 when no headlines are configured.
    fn headline(&self) -> Result<Response<Full<Bytes>>, hyper::Error> {
        match self.state.headlines.current() {
            None => Self::no_data(),
            Some(headline) => Self::ok_data(HeadlineResponse {
                headline: headline.to_string(),
            }),
        }
    }

    pub fn route(
        &self,
        method: &Method,
        path: &str,
        query: Option<&str>,
    ) -> Result<Response<Full<Bytes>>, hyper::Error> {
        match method {
            &Method::GET => match path {
                "/api/status" => self.status(query),
                "/api/hours" => self.hours(query),
                "/api/headline" => self.headline(),
                _ => Self::not_found(""),
            },
            _ => Self::not_found(""),
        }
    }

    fn respond(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
        let mut res = Response::new(Full::new(body));
        *res.status_mut() = status;
        let headers = res.headers_mut();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        if status != StatusCode::NO_CONTENT {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        res
    }

    /// Return a 200 OK response with the data provided.
    fn ok_data<T: Serialize>(body: T) -> Result<Response<Full<Bytes>>, hyper::Error> {
        match serde_json::to_vec(&body) {
            Ok(data) => Ok(Self::respond(StatusCode::OK, Bytes::from(data))),
            Err(err) => Self::server_error(&err.to_string()),
        }
    }

    fn error_body(message: &str) -> Bytes {
        Bytes::from(serde_json::to_vec(&ErrorResponse { error: message }).unwrap_or_default())
    }

    /// Return a 500 Internal Server Error response with the message provided.
    fn server_error(message: &str) -> Result<Response<Full<Bytes>>, hyper::Error> {
        tracing::error!("Internal error: {}", message);
        Ok(Self::respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            Self::error_body(message),
        ))
    }

    /// Return a 404 Not Found response with the message provided. The message here is optional.
    /// Leave it empty for no message.
    fn not_found(message: &str) -> Result<Response<Full<Bytes>>, hyper::Error> {
        let body = if message.is_empty() {
            Bytes::new()
        } else {
            Self::error_body(message)
        };
        Ok(Self::respond(StatusCode::NOT_FOUND, body))
    }

    /// Return a 400 Bad Request response with the message provided.
    fn bad_request(message: &str) -> Result<Response<Full<Bytes>>, hyper::Error> {
        Ok(Self::respond(StatusCode::BAD_REQUEST, Self::error_body(message)))
    }

    /// Return a 204 No Content response.
    fn no_data() -> Result<Response<Full<Bytes>>, hyper::Error> {
        Ok(Self::respond(StatusCode::NO_CONTENT, Bytes::new()))
    }
}

impl Service<Request<Incoming>> for Server {
    type Response = Response<Full<Bytes>>;
    type Error = hyper::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        tracing::debug!(method = %req.method(), uri = %req.uri(), "Request");
        let res = self.route(req.method(), req.uri().path(), req.uri().query());
        Box::pin(async { res })
    }
}
