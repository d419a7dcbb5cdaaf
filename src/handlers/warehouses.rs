// src/handlers/warehouses.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{
        error::{ApiError, AppError, MessageResponse, RouteFailure},
        extract::{AppJson, AppPath},
    },
    config::AppState,
    models::{
        inventory::WarehouseInventoryEntry,
        warehouse::{Warehouse, WarehouseRecord},
    },
};

// Status/mensagem de cada rota quando o banco falha
const LIST_FAILURE: RouteFailure =
    RouteFailure::new(StatusCode::INTERNAL_SERVER_ERROR, "Unable to retrieve warehouses");
const GET_FAILURE: RouteFailure =
    RouteFailure::new(StatusCode::NOT_FOUND, "Unable to retrieve warehouse");
const CREATE_FAILURE: RouteFailure =
    RouteFailure::new(StatusCode::NOT_FOUND, "Error creating warehouse");
const UPDATE_FAILURE: RouteFailure =
    RouteFailure::new(StatusCode::NOT_FOUND, "Warehouse ID not found");
const DELETE_FAILURE: RouteFailure =
    RouteFailure::new(StatusCode::INTERNAL_SERVER_ERROR, "Error deleting warehouse");
const INVENTORIES_FAILURE: RouteFailure =
    RouteFailure::new(StatusCode::NOT_FOUND, "Warehouse ID not found");

// ---
// Payload: Warehouse (usado no POST e no PUT)
// ---
// Os campos são Option para que "ausente" vire 400 com a nossa mensagem,
// e não uma rejeição genérica do extrator Json.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WarehousePayload {
    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "Manhattan")]
    pub warehouse_name: Option<String>,

    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "503 Broadway")]
    pub address: Option<String>,

    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "New York")]
    pub city: Option<String>,

    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "USA")]
    pub country: Option<String>,

    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "Parmin Aujla")]
    pub contact_name: Option<String>,

    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "Warehouse Manager")]
    pub contact_position: Option<String>,

    #[schema(example = "+1 (646) 123-1234")]
    pub contact_phone: Option<String>,

    #[schema(example = "paujla@instock.com")]
    pub contact_email: Option<String>,
}

impl WarehousePayload {
    /// Valida e devolve os campos prontos para gravar.
    pub fn into_record(self) -> Result<WarehouseRecord, AppError> {
        self.validate()?;

        Ok(WarehouseRecord {
            warehouse_name: self.warehouse_name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            contact_name: self.contact_name.unwrap_or_default(),
            contact_position: self.contact_position.unwrap_or_default(),
            contact_phone: self.contact_phone,
            contact_email: self.contact_email,
        })
    }
}

// GET /warehouses
#[utoipa::path(
    get,
    path = "/warehouses",
    tag = "Warehouses",
    responses(
        (status = 200, description = "Todos os armazéns", body = Vec<Warehouse>),
        (status = 500, description = "Falha ao consultar", body = MessageResponse)
    )
)]
pub async fn list_warehouses(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let warehouses = app_state
        .warehouse_service
        .list_warehouses()
        .await
        .map_err(|e| e.to_api_error(LIST_FAILURE))?;

    Ok((StatusCode::OK, Json(warehouses)))
}

// GET /warehouses/{id}
#[utoipa::path(
    get,
    path = "/warehouses/{id}",
    tag = "Warehouses",
    params(("id" = Uuid, Path, description = "ID do armazém")),
    responses(
        (status = 200, description = "Armazém encontrado", body = Warehouse),
        (status = 404, description = "Armazém não encontrado", body = MessageResponse)
    )
)]
pub async fn get_warehouse(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let warehouse = app_state
        .warehouse_service
        .get_warehouse(id)
        .await
        .map_err(|e| e.to_api_error(GET_FAILURE))?;

    Ok((StatusCode::OK, Json(warehouse)))
}

// POST /warehouses
#[utoipa::path(
    post,
    path = "/warehouses",
    tag = "Warehouses",
    request_body = WarehousePayload,
    responses(
        (status = 200, description = "Armazém criado (com o id gerado)", body = Warehouse),
        (status = 400, description = "Campos obrigatórios faltando", body = MessageResponse),
        (status = 404, description = "Falha ao inserir", body = MessageResponse)
    )
)]
pub async fn create_warehouse(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<WarehousePayload>,
) -> Result<impl IntoResponse, ApiError> {
    // 1. Validar o payload
    let record = payload
        .into_record()
        .map_err(|e| e.to_api_error(CREATE_FAILURE))?;

    // 2. Gravar
    let warehouse = app_state
        .warehouse_service
        .create_warehouse(&record)
        .await
        .map_err(|e| e.to_api_error(CREATE_FAILURE))?;

    Ok((StatusCode::OK, Json(warehouse)))
}

// PUT /warehouses/{id}
#[utoipa::path(
    put,
    path = "/warehouses/{id}",
    tag = "Warehouses",
    request_body = WarehousePayload,
    params(("id" = Uuid, Path, description = "ID do armazém")),
    responses(
        (status = 200, description = "Armazém atualizado", body = Warehouse),
        (status = 400, description = "Campos obrigatórios faltando", body = MessageResponse),
        (status = 404, description = "Armazém não encontrado", body = MessageResponse)
    )
)]
pub async fn update_warehouse(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<WarehousePayload>,
) -> Result<impl IntoResponse, ApiError> {
    let record = payload
        .into_record()
        .map_err(|e| e.to_api_error(UPDATE_FAILURE))?;

    // Se o id não existir, o serviço devolve WarehouseIdNotFound e paramos aqui.
    let warehouse = app_state
        .warehouse_service
        .update_warehouse(id, &record)
        .await
        .map_err(|e| e.to_api_error(UPDATE_FAILURE))?;

    Ok((StatusCode::OK, Json(warehouse)))
}

// DELETE /warehouses/{id}
#[utoipa::path(
    delete,
    path = "/warehouses/{id}",
    tag = "Warehouses",
    params(("id" = Uuid, Path, description = "ID do armazém")),
    responses(
        (status = 204, description = "Armazém e seus itens removidos"),
        (status = 404, description = "Armazém não encontrado", body = MessageResponse),
        (status = 500, description = "Falha na transação", body = MessageResponse)
    )
)]
pub async fn delete_warehouse(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .warehouse_service
        .delete_warehouse(id)
        .await
        .map_err(|e| e.to_api_error(DELETE_FAILURE))?;

    Ok(StatusCode::NO_CONTENT)
}

// GET /warehouses/{id}/inventories
#[utoipa::path(
    get,
    path = "/warehouses/{id}/inventories",
    tag = "Warehouses",
    params(("id" = Uuid, Path, description = "ID do armazém")),
    responses(
        (status = 200, description = "Itens do armazém", body = Vec<WarehouseInventoryEntry>),
        (status = 404, description = "Armazém não encontrado", body = MessageResponse)
    )
)]
pub async fn list_warehouse_inventories(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .warehouse_service
        .list_warehouse_inventories(id)
        .await
        .map_err(|e| e.to_api_error(INVENTORIES_FAILURE))?;

    Ok((StatusCode::OK, Json(items)))
}
