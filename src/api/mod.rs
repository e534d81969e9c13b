use std::sync::Arc;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use rand::seq::SliceRandom;
use serde::Serialize;
use thiserror::Error;

use crate::pagination::{self, PaginationInfo};
use crate::store::{Record, ResourceKind, ResourceStore, RANDOM_ID};
use crate::utils;

pub struct AppState {
    pub store: Arc<ResourceStore>,
    pub page_size: usize,
}

pub type SharedState = Arc<AppState>;

/// One routed collection: the list route, the single-item route and the
/// collection behind them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub route: &'static str,
    pub singular: &'static str,
    pub kind: ResourceKind,
}

impl ResourceDescriptor {
    const fn new(route: &'static str, singular: &'static str, kind: ResourceKind) -> Self {
        Self {
            route,
            singular,
            kind,
        }
    }
}

pub const RESOURCES: [ResourceDescriptor; 3] = [
    ResourceDescriptor::new("jokes", "joke", ResourceKind::Joke),
    ResourceDescriptor::new("motivations", "motivation", ResourceKind::Motivation),
    ResourceDescriptor::new("proverbs", "proverb", ResourceKind::Proverb),
];

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} ID is invalid")]
    InvalidId(&'static str),

    #[error("Resource not found!")]
    NotFound,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        };
        let body = ErrorBody {
            error: true,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ListResponse<'a> {
    pub data: &'a [Record],
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub jokes_items_count: usize,
    pub motivation_items_count: usize,
    pub proverbs_items_count: usize,
}

pub fn router(state: SharedState) -> Router {
    let mut router = Router::new();
    for descriptor in RESOURCES {
        router = router.merge(resource_routes(descriptor));
    }
    router
        .route("/ping", any(ping))
        .fallback(not_found)
        .with_state(state)
}

/// List and single-item routes for one descriptor. Other verbs on these
/// paths get the same 404 as unmatched paths.
fn resource_routes(descriptor: ResourceDescriptor) -> Router<SharedState> {
    let list = get(
        move |State(state): State<SharedState>,
              query: Result<Query<Vec<(String, String)>>, QueryRejection>| async move {
            let requested = query.ok().and_then(|Query(pairs)| requested_page(&pairs));
            list_resource(descriptor, &state, requested)
        },
    )
    .fallback(not_found);
    let single = get(
        move |State(state): State<SharedState>,
              id: Result<Path<String>, PathRejection>| async move {
            match id {
                Ok(Path(id)) => single_resource(descriptor, &state, &id),
                Err(rejection) => {
                    tracing::debug!(resource = descriptor.singular, %rejection, "undecodable id");
                    Err(ApiError::InvalidId(descriptor.singular))
                }
            }
        },
    )
    .fallback(not_found);

    Router::new()
        .route(&format!("/{}/", descriptor.route), list.clone())
        .route(&format!("/{}", descriptor.route), list)
        .route(&format!("/{}/:id", descriptor.singular), single)
}

/// First `page` value of the query string; repeated keys after it are ignored.
fn requested_page(pairs: &[(String, String)]) -> Option<i64> {
    pairs
        .iter()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| utils::parse_int_prefix(value))
}

pub fn list_resource(
    descriptor: ResourceDescriptor,
    state: &AppState,
    requested: Option<i64>,
) -> Response {
    let records = state.store.records(descriptor.kind);
    let bounds = pagination::paginate(records.len(), requested, state.page_size);
    tracing::debug!(
        resource = descriptor.route,
        page = bounds.current,
        start = bounds.start,
        end = bounds.end,
        "list page"
    );
    let body = ListResponse {
        data: bounds.slice(records),
        pagination: PaginationInfo::from_bounds(descriptor.route, &bounds),
    };
    Json(body).into_response()
}

pub fn single_resource(
    descriptor: ResourceDescriptor,
    state: &AppState,
    id: &str,
) -> Result<Json<Record>, ApiError> {
    let found = if id == RANDOM_ID {
        state
            .store
            .records(descriptor.kind)
            .choose(&mut rand::thread_rng())
    } else {
        let wanted = utils::parse_int_prefix(id).unwrap_or(-1);
        state.store.find(descriptor.kind, wanted)
    };

    match found {
        Some(record) => Ok(Json(record.clone())),
        None => {
            tracing::debug!(resource = descriptor.singular, id, "unmatched id");
            Err(ApiError::InvalidId(descriptor.singular))
        }
    }
}

async fn ping(State(state): State<SharedState>) -> Json<PingResponse> {
    Json(PingResponse {
        jokes_items_count: state.store.count(ResourceKind::Joke),
        motivation_items_count: state.store.count(ResourceKind::Motivation),
        proverbs_items_count: state.store.count(ResourceKind::Proverb),
    })
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
