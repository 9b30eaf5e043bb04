// Copyright (C) 2026 The roombook Authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use roombook_api::{
    ApiError, AuthenticatedActor, CancelBookingRequest, CancelBookingResponse,
    CheckAvailabilityRequest, CheckAvailabilityResponse, CreateBookingRequest,
    CreateBookingResponse, CreateRoomRequest, CreateRoomResponse, ListBookingsRequest,
    ListBookingsResponse, ListRoomsResponse, MeetingReportRequest, MeetingReportResponse, Role,
    authenticate_stub, cancel_booking, check_availability, create_booking, create_room,
    list_bookings, list_rooms, meeting_report,
};
use roombook_notify::{DeliveryError, Notification, Notifier};
use roombook_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{OffsetDateTime, PrimitiveDateTime};
use tokio::sync::Mutex;
use tracing::info;

/// roombook server - HTTP server for the room booking system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for rooms and bookings.
    persistence: Arc<Mutex<Persistence>>,
}

/// Notification sink that writes deliveries to the log.
///
/// Outbound channels (email, chat) are out of scope for the server
/// binary; every notification the engine emits is recorded here so the
/// routing is observable.
struct LogNotifier;

impl Notifier for LogNotifier {
    fn deliver(&mut self, notification: &Notification) -> Result<(), DeliveryError> {
        info!(
            recipient = ?notification.recipient,
            kind = %notification.kind,
            booking_id = notification.booking_id,
            title = %notification.title,
            "Notification delivered"
        );
        Ok(())
    }
}

/// API request for creating a room.
///
/// This includes authentication information in addition to the room data.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateRoomApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The room name.
    name: String,
}

/// API request for creating a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateBookingApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The room to book.
    room_id: i64,
    /// The booking date ("YYYY-MM-DD").
    date: String,
    /// The start time ("HH:MM", 24-hour).
    start_time: String,
    /// The end time ("HH:MM", 24-hour, exclusive).
    end_time: String,
    /// Optional free-text purpose.
    purpose: Option<String>,
    /// The expected number of attendees.
    attendees_count: u32,
}

/// API request for cancelling a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CancelBookingApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The booking to cancel.
    booking_id: i64,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RoomUnavailable { .. } => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Parses a role string into a Role enum.
fn parse_role(role_str: &str) -> Result<Role, HttpError> {
    match role_str.to_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "hr" => Ok(Role::Hr),
        _ => Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid role: '{role_str}'. Must be 'admin' or 'hr'"),
        }),
    }
}

/// Authenticates the actor named in a request.
fn authenticate(actor_id: &str, actor_role: &str) -> Result<AuthenticatedActor, HttpError> {
    let role: Role = parse_role(actor_role)?;
    authenticate_stub(actor_id.to_string(), role).map_err(|e| HttpError {
        status: StatusCode::UNAUTHORIZED,
        message: e.to_string(),
    })
}

/// The instant used to classify bookings as upcoming or completed.
fn report_now() -> PrimitiveDateTime {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status.
    status: String,
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/rooms` endpoint.
///
/// Creates a new room. Admin only.
async fn handle_create_room(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateRoomApiRequest>,
) -> Result<Json<CreateRoomResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        name = %req.name,
        "Handling create_room request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let create_request: CreateRoomRequest = CreateRoomRequest { name: req.name };

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateRoomResponse = create_room(&mut persistence, &create_request, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/rooms` endpoint.
///
/// Lists all rooms.
async fn handle_list_rooms(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListRoomsResponse>, HttpError> {
    info!("Handling list_rooms request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListRoomsResponse = list_rooms(&mut persistence)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/bookings` endpoint.
///
/// Creates a new booking for the acting user.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingApiRequest>,
) -> Result<Json<CreateBookingResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        room_id = req.room_id,
        date = %req.date,
        "Handling create_booking request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let create_request: CreateBookingRequest = CreateBookingRequest {
        room_id: req.room_id,
        date: req.date,
        start_time: req.start_time,
        end_time: req.end_time,
        purpose: req.purpose,
        attendees_count: req.attendees_count,
    };

    let mut notifier: LogNotifier = LogNotifier;
    let mut persistence = app_state.persistence.lock().await;
    let response: CreateBookingResponse =
        create_booking(&mut persistence, &mut notifier, &create_request, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/bookings/cancel` endpoint.
///
/// Cancels a booking. Admins may cancel any booking; hr actors only
/// their own.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CancelBookingApiRequest>,
) -> Result<Json<CancelBookingResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        booking_id = req.booking_id,
        "Handling cancel_booking request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let cancel_request: CancelBookingRequest = CancelBookingRequest {
        booking_id: req.booking_id,
    };

    let mut notifier: LogNotifier = LogNotifier;
    let mut persistence = app_state.persistence.lock().await;
    let response: CancelBookingResponse =
        cancel_booking(&mut persistence, &mut notifier, &cancel_request, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/availability` endpoint.
///
/// Advisory check of whether a slot is free; booking creation
/// re-validates at the write boundary regardless.
async fn handle_check_availability(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<CheckAvailabilityRequest>,
) -> Result<Json<CheckAvailabilityResponse>, HttpError> {
    info!(
        room_id = query.room_id,
        date = %query.date,
        "Handling check_availability request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CheckAvailabilityResponse = check_availability(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/bookings` endpoint.
///
/// Lists bookings, optionally filtered by date range, status, and room.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListBookingsRequest>,
) -> Result<Json<ListBookingsResponse>, HttpError> {
    info!("Handling list_bookings request");

    let mut persistence = app_state.persistence.lock().await;
    let response: ListBookingsResponse = list_bookings(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/reports/meetings` endpoint.
///
/// Computes the meeting report over bookings matching the filter.
async fn handle_meeting_report(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<MeetingReportRequest>,
) -> Result<Json<MeetingReportResponse>, HttpError> {
    info!("Handling meeting_report request");

    let mut persistence = app_state.persistence.lock().await;
    let response: MeetingReportResponse =
        meeting_report(&mut persistence, &query, report_now())?;
    drop(persistence);

    Ok(Json(response))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/rooms", post(handle_create_room))
        .route("/rooms", get(handle_list_rooms))
        .route("/bookings", post(handle_create_booking))
        .route("/bookings", get(handle_list_bookings))
        .route("/bookings/cancel", post(handle_cancel_booking))
        .route("/availability", get(handle_check_availability))
        .route("/reports/meetings", get(handle_meeting_report))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing roombook server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
