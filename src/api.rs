//! REST API over the parser and generator.
//!
//! | Route | Description |
//! |-------|-------------|
//! | `GET /validation/{card_number}` | Parsed fields, checksum validity, network |
//! | `GET /random?network={name}` | A random number and a link to its validation |
//! | `GET /networks` | The reference data |
//! | `GET /health` | Liveness |
//!
//! Swagger UI is served at `/swagger-ui/`.

use axum::{
    extract::{Host, MatchedPath, Path, Query, Request},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::Span;
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::card::CardReport;
use crate::generate::generate_random;
use crate::network::Network;
use crate::parse::parse;

/// `Cache-Control` value for responses that must never be reused.
pub const NEVER_CACHE: &str = "max-age=0, no-cache, no-store, must-revalidate, private";

/// Header set by TLS-terminating proxies with the client-facing scheme.
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

// ============================================================================
// OpenAPI Documentation
// ============================================================================

/// OpenAPI document for the routes in [`router`].
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Numbers API",
        version = "0.1.0",
        description = "Validates payment card numbers and generates random ones. Validated means only that a number is algorithmically self-consistent; no check is made that it belongs to a real account.",
        license(name = "MIT")
    ),
    tags(
        (name = "Validation", description = "Card number field extraction and checksum validation"),
        (name = "Generation", description = "Random card number generation"),
        (name = "Reference", description = "Supported networks"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(validation, random, networks, health),
    components(schemas(
        CardReport,
        RandomCardResponse,
        ErrorResponse,
        NetworkInfo,
        HealthResponse,
    ))
)]
pub struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for `/random`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RandomQuery {
    /// Valid values are visa, mastercard, amex, discover, diners, jcb. If omitted, a network is chosen at random.
    pub network: Option<String>,
}

/// A generated card number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "card_number": "4556737586899855",
    "validation_link": "http://localhost:3000/validation/4556737586899855"
}))]
pub struct RandomCardResponse {
    /// The generated number, digits only
    pub card_number: String,
    /// Absolute URL of the validation endpoint for this number
    pub validation_link: String,
}

/// Error body for 4xx responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason the request was rejected
    pub error: String,
}

/// A supported network.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NetworkInfo {
    /// Canonical network name
    pub name: String,
    /// Permitted total card number lengths
    pub lengths: Vec<u8>,
    /// IIN ranges as `start-end`, inclusive
    pub iin_ranges: Vec<String>,
}

impl From<Network> for NetworkInfo {
    fn from(network: Network) -> Self {
        Self {
            name: network.name().to_string(),
            lengths: network.valid_lengths().to_vec(),
            iin_ranges: network.iin_ranges().iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}

/// A 400 response carrying an [`ErrorResponse`] body.
#[derive(Debug)]
pub struct ApiError(String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: self.0 }),
        )
            .into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Get the fields of a card number and whether its check digit verifies
#[utoipa::path(
    get,
    path = "/validation/{card_number}",
    params(
        ("card_number" = String, Path, description = "Digits, spaces, and hyphens are allowed. There must be at least 12 digits and no more than 19.")
    ),
    responses(
        (status = 200, description = "Parsed fields", body = CardReport),
        (status = 400, description = "Not a card number", body = ErrorResponse)
    ),
    tag = "Validation"
)]
async fn validation(Path(card_number): Path<String>) -> Result<Json<CardReport>, ApiError> {
    match parse(&card_number) {
        Ok(card) => {
            tracing::info!(
                card = %card.masked_with_iin(),
                network = card.network_name(),
                valid = card.is_valid(),
                "validated card number"
            );
            Ok(Json(card.report()))
        }
        Err(e) => {
            tracing::info!(error = %e, "rejected card number");
            Err(ApiError(e.to_string()))
        }
    }
}

/// Get a randomly generated, validly formatted card number
#[utoipa::path(
    get,
    path = "/random",
    params(RandomQuery),
    responses(
        (status = 200, description = "Generated number", body = RandomCardResponse),
        (status = 400, description = "Unknown network", body = ErrorResponse)
    ),
    tag = "Generation"
)]
async fn random(
    Host(host): Host,
    headers: HeaderMap,
    Query(query): Query<RandomQuery>,
) -> Response {
    let mut response = match generate_random(query.network.as_deref()) {
        Ok(card_number) => {
            let validation_link = format!(
                "{}://{}/validation/{}",
                request_scheme(&headers),
                host,
                card_number
            );
            Json(RandomCardResponse {
                card_number,
                validation_link,
            })
            .into_response()
        }
        Err(e) => ApiError(e.to_string()).into_response(),
    };

    // Every call returns a different number
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(NEVER_CACHE));
    response
}

/// The scheme the client used, as reported by a proxy. Anything other than
/// `http` or `https` is ignored.
fn request_scheme(headers: &HeaderMap) -> &'static str {
    let forwarded = headers
        .get(X_FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim);

    match forwarded {
        Some(proto) if proto.eq_ignore_ascii_case("https") => "https",
        _ => "http",
    }
}

/// List the supported networks
#[utoipa::path(
    get,
    path = "/networks",
    responses(
        (status = 200, description = "Supported networks", body = [NetworkInfo])
    ),
    tag = "Reference"
)]
async fn networks() -> Json<Vec<NetworkInfo>> {
    Json(Network::ALL.into_iter().map(NetworkInfo::from).collect())
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Router
// ============================================================================

/// Request span carrying the route template instead of the URI, so card
/// numbers in the path never reach the logs.
fn request_span(request: &Request) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or("unmatched", MatchedPath::as_str);

    tracing::info_span!(
        "request",
        method = %request.method(),
        route,
        version = ?request.version(),
    )
}

/// Builds the application router with Swagger UI, CORS, and request tracing.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/validation/:card_number", get(validation))
        .route("/random", get(random))
        .route("/networks", get(networks))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}
