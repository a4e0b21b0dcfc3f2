//! Generated OpenAPI documentation.

use utoipa::OpenApi;

use super::endpoints::{HealthResponse, ReadyResponse, StatusResponse};
use super::handlers::ServiceInfo;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::endpoints::health,
        crate::web::endpoints::ready,
        crate::web::endpoints::status,
    ),
    components(schemas(HealthResponse, ReadyResponse, StatusResponse))
)]
pub struct ApiDoc;

/// OpenAPI document with the service metadata bound into `info`.
pub fn openapi(info: &ServiceInfo) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = info.title.clone();
    doc.info.description = Some(info.description.clone());
    doc.info.version = info.version.to_string();
    doc
}
