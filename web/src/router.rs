use crate::{controller::health_check_controller, middleware::auth::require_auth, AppState};
use axum::{
    middleware::from_fn_with_state,
    routing::{get, patch, post},
    Router,
};

use crate::controller::{attachment_controller, todo_controller};

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Todo Platform API"
        ),
        paths(
            todo_controller::index,
            todo_controller::create,
            todo_controller::update,
            todo_controller::delete,
            attachment_controller::create_upload_url,
            attachment_controller::read,
            attachment_controller::delete,
            health_check_controller::health_check,
        ),
        components(
            schemas(
                entity::todos::Model,
                entity::todos::TodoUpdate,
                crate::params::todo::CreateParams,
            )
        ),
        modifiers(&SecurityAddon),
        tags(
            (name = "todo_platform", description = "Personal to-do list API")
        )
    )]
struct ApiDoc;

struct SecurityAddon;

// Every endpoint except /health expects an identity provider issued JWT as
// `Authorization: Bearer <token>`.
impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(todo_routes(app_state.clone()))
        .merge(attachment_routes(app_state))
        .merge(health_routes())
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn todo_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/todos",
            get(todo_controller::index).post(todo_controller::create),
        )
        .route(
            "/todos/{todo_id}",
            patch(todo_controller::update).delete(todo_controller::delete),
        )
        .route_layer(from_fn_with_state(app_state.clone(), require_auth))
        .with_state(app_state)
}

fn attachment_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/todos/{todo_id}/attachment",
            post(attachment_controller::create_upload_url)
                .get(attachment_controller::read)
                .delete(attachment_controller::delete),
        )
        .route_layer(from_fn_with_state(app_state.clone(), require_auth))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}
