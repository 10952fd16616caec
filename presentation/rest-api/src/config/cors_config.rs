use poem::http::{HeaderValue, Method, StatusCode, header};
use poem::{Endpoint, IntoResponse, Middleware, Request, Response};

/// Initialize the CORS policy for the scan frontend
///
/// The contract is fixed: wildcard origin, `POST, OPTIONS`, `Content-Type`.
/// The three headers go on every response, and any `OPTIONS` request is
/// answered `200` with an empty body before routing runs.
pub fn init_cors() -> CorsHeaders {
    CorsHeaders
}

pub struct CorsHeaders;

impl<E: Endpoint> Middleware<E> for CorsHeaders {
    type Output = CorsHeadersEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        CorsHeadersEndpoint { ep }
    }
}

pub struct CorsHeadersEndpoint<E> {
    ep: E,
}

fn apply_headers(resp: &mut Response) {
    let headers = resp.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

impl<E: Endpoint> Endpoint for CorsHeadersEndpoint<E> {
    type Output = Response;

    async fn call(&self, req: Request) -> poem::Result<Self::Output> {
        // Preflight short-circuits everything, regardless of path or payload.
        if req.method() == Method::OPTIONS {
            let mut resp = StatusCode::OK.into_response();
            apply_headers(&mut resp);
            return Ok(resp);
        }

        let mut resp = self.ep.get_response(req).await;
        apply_headers(&mut resp);
        Ok(resp)
    }
}
