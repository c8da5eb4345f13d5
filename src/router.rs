use axum::{routing::get, Router};
use utoipa::OpenApi;

use crate::{
    controller::bootcamp::{
        create_bootcamp, delete_bootcamp, find_bootcamps_in_radius, get_bootcamp, get_bootcamps,
        update_bootcamp,
    },
    state::AppState,
};

/// OpenAPI documentation for the bootcamp API, served through Swagger UI.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controller::bootcamp::get_bootcamps,
        crate::controller::bootcamp::get_bootcamp,
        crate::controller::bootcamp::create_bootcamp,
        crate::controller::bootcamp::update_bootcamp,
        crate::controller::bootcamp::delete_bootcamp,
        crate::controller::bootcamp::find_bootcamps_in_radius,
    ),
    tags(
        (name = "bootcamp", description = "Bootcamp listing management")
    )
)]
pub struct ApiDoc;

/// Builds the API route table.
///
/// The radius route is registered before the `{id}` routes so `radius` is
/// never captured as an ID.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/bootcamps",
            get(get_bootcamps).post(create_bootcamp),
        )
        .route(
            "/api/v1/bootcamps/radius/{zipcode}/{distance}",
            get(find_bootcamps_in_radius),
        )
        .route(
            "/api/v1/bootcamps/{id}",
            get(get_bootcamp)
                .put(update_bootcamp)
                .delete(delete_bootcamp),
        )
}
