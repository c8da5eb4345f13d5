use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        bootcamp::{
            BootcampItemDto, BootcampListDto, CreateBootcampDto, CreateBootcampParams, DeletedDto,
            UpdateBootcampDto, UpdateBootcampParams,
        },
    },
    service::bootcamp::BootcampService,
    state::AppState,
};

/// Tag for grouping bootcamp endpoints in OpenAPI documentation
pub static BOOTCAMP_TAG: &str = "bootcamp";

/// Get all bootcamps.
///
/// # Returns
/// - `200 OK` - All bootcamps with a count
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps",
    tag = BOOTCAMP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved bootcamps", body = BootcampListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamps(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BootcampService::new(&state.db, state.geocoder.as_ref());

    let bootcamps = service.get_all().await?;

    Ok((StatusCode::OK, Json(BootcampListDto::new(bootcamps))))
}

/// Get a single bootcamp by ID.
///
/// # Returns
/// - `200 OK` - The bootcamp
/// - `404 Not Found` - No bootcamp with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{id}",
    tag = BOOTCAMP_TAG,
    params(
        ("id" = i32, Path, description = "Bootcamp ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bootcamp", body = BootcampItemDto),
        (status = 404, description = "Bootcamp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamp(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BootcampService::new(&state.db, state.geocoder.as_ref());

    let bootcamp = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(BootcampItemDto::new(bootcamp))))
}

/// Create a new bootcamp.
///
/// Validates the payload, derives the slug from the name, geocodes the
/// submitted address into the stored location (the address itself is never
/// persisted), and inserts the record.
///
/// # Returns
/// - `201 Created` - The created bootcamp
/// - `400 Bad Request` - Validation failure or duplicate name
/// - `502 Bad Gateway` - Geocoding collaborator failure
#[utoipa::path(
    post,
    path = "/api/v1/bootcamps",
    tag = BOOTCAMP_TAG,
    request_body = CreateBootcampDto,
    responses(
        (status = 201, description = "Successfully created bootcamp", body = BootcampItemDto),
        (status = 400, description = "Invalid bootcamp data", body = ErrorDto),
        (status = 502, description = "Geocoding failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bootcamp(
    State(state): State<AppState>,
    Json(payload): Json<CreateBootcampDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateBootcampParams::from_dto(payload)?;

    let service = BootcampService::new(&state.db, state.geocoder.as_ref());

    let bootcamp = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(BootcampItemDto::new(bootcamp))))
}

/// Update a bootcamp by ID.
///
/// Partial update with the same validation as create: a supplied name
/// re-derives the slug, a supplied address is re-geocoded.
///
/// # Returns
/// - `200 OK` - The updated bootcamp
/// - `400 Bad Request` - Validation failure or duplicate name
/// - `404 Not Found` - No bootcamp with this ID
/// - `502 Bad Gateway` - Geocoding collaborator failure
#[utoipa::path(
    put,
    path = "/api/v1/bootcamps/{id}",
    tag = BOOTCAMP_TAG,
    params(
        ("id" = i32, Path, description = "Bootcamp ID")
    ),
    request_body = UpdateBootcampDto,
    responses(
        (status = 200, description = "Successfully updated bootcamp", body = BootcampItemDto),
        (status = 400, description = "Invalid bootcamp data", body = ErrorDto),
        (status = 404, description = "Bootcamp not found", body = ErrorDto),
        (status = 502, description = "Geocoding failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bootcamp(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBootcampDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpdateBootcampParams::from_dto(payload)?;

    let service = BootcampService::new(&state.db, state.geocoder.as_ref());

    let bootcamp = service.update(id, params).await?;

    Ok((StatusCode::OK, Json(BootcampItemDto::new(bootcamp))))
}

/// Delete a bootcamp by ID.
///
/// # Returns
/// - `200 OK` - Deleted, empty data payload
/// - `404 Not Found` - No bootcamp with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/bootcamps/{id}",
    tag = BOOTCAMP_TAG,
    params(
        ("id" = i32, Path, description = "Bootcamp ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted bootcamp", body = DeletedDto),
        (status = 404, description = "Bootcamp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bootcamp(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = BootcampService::new(&state.db, state.geocoder.as_ref());

    service.delete(id).await?;

    Ok((StatusCode::OK, Json(DeletedDto::new())))
}

/// Find bootcamps within a radius of a zipcode.
///
/// Resolves the zipcode through the geocoding collaborator and returns the
/// bootcamps whose stored coordinates lie within `distance` miles
/// (great-circle) of the resolved point.
///
/// # Returns
/// - `200 OK` - Matching bootcamps with a count
/// - `502 Bad Gateway` - Geocoding collaborator failure
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/radius/{zipcode}/{distance}",
    tag = BOOTCAMP_TAG,
    params(
        ("zipcode" = String, Path, description = "Center zipcode"),
        ("distance" = f64, Path, description = "Search radius in miles")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bootcamps in radius", body = BootcampListDto),
        (status = 502, description = "Geocoding failure", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_bootcamps_in_radius(
    State(state): State<AppState>,
    Path((zipcode, distance)): Path<(String, f64)>,
) -> Result<impl IntoResponse, AppError> {
    let service = BootcampService::new(&state.db, state.geocoder.as_ref());

    let bootcamps = service.find_in_radius(&zipcode, distance).await?;

    Ok((StatusCode::OK, Json(BootcampListDto::new(bootcamps))))
}
