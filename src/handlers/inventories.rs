// src/handlers/inventories.rs

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    common::{
        error::{ApiError, AppError, MessageResponse, RouteFailure},
        extract::{AppJson, AppPath},
    },
    config::AppState,
    models::inventory::{InventoryDetail, InventoryItem, InventoryRecord, DEFAULT_STATUS},
};

const LIST_FAILURE: RouteFailure =
    RouteFailure::new(StatusCode::NOT_FOUND, "Unable to retrieve inventories");
const GET_FAILURE: RouteFailure = RouteFailure::new(StatusCode::NOT_FOUND, "Item not found");
const CREATE_FAILURE: RouteFailure = RouteFailure::new(StatusCode::NOT_FOUND, "Error creating item");
const UPDATE_FAILURE: RouteFailure =
    RouteFailure::new(StatusCode::INTERNAL_SERVER_ERROR, "Error updating inventory");
const DELETE_FAILURE: RouteFailure =
    RouteFailure::new(StatusCode::BAD_REQUEST, "Error deleting inventory item");

const CHOOSE_WAREHOUSE: &str = "Please choose a warehouse";
const QUANTITY_RANGE: &str = "Please ensure the quantity is 0 or higher";

// Ordem em que o cliente espera as mensagens de validação
const CREATE_FIELD_ORDER: [&str; 5] =
    ["warehouse_id", "quantity", "item_name", "description", "category"];
const UPDATE_FIELD_ORDER: [&str; 5] =
    ["warehouse_name", "quantity", "item_name", "description", "category"];

// ---
// Quantidade: número inteiro >= 0, vindo como número JSON ou string numérica
// ---
pub(crate) fn parse_quantity(value: &Value) -> Option<i32> {
    let quantity = match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => {
                let f = n.as_f64()?;
                if f.fract() != 0.0 {
                    return None;
                }
                f as i64
            }
        },
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    if quantity < 0 {
        return None;
    }
    i32::try_from(quantity).ok()
}

fn validate_quantity(value: &Value) -> Result<(), ValidationError> {
    if parse_quantity(value).is_none() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0);
        err.message = Some(QUANTITY_RANGE.into());
        return Err(err);
    }
    Ok(())
}

// ---
// Armazém: string com um UUID válido; vazio, nulo ou outro tipo é "não escolhido"
// ---
pub(crate) fn parse_warehouse_id(value: &Value) -> Option<Uuid> {
    match value {
        Value::String(s) => Uuid::parse_str(s.trim()).ok(),
        _ => None,
    }
}

fn validate_warehouse_id(value: &Value) -> Result<(), ValidationError> {
    if parse_warehouse_id(value).is_none() {
        let mut err = ValidationError::new("required");
        err.message = Some(CHOOSE_WAREHOUSE.into());
        return Err(err);
    }
    Ok(())
}

// Monta o registro depois que o payload já passou pela validação.
fn item_record(
    item_name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    status: Option<String>,
    quantity: &Value,
) -> Result<InventoryRecord, AppError> {
    let quantity = parse_quantity(quantity)
        .ok_or_else(|| AppError::InvalidField(QUANTITY_RANGE.to_string()))?;

    Ok(InventoryRecord {
        item_name: item_name.unwrap_or_default(),
        description: description.unwrap_or_default(),
        category: category.unwrap_or_default(),
        status: status
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        quantity,
    })
}

// ---
// Payload: CreateInventory
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInventoryPayload {
    // Value: um select sem escolha manda "" e isso precisa virar 400, não 422.
    #[serde(default)]
    #[validate(custom(function = "validate_warehouse_id"))]
    #[schema(value_type = Uuid)]
    pub warehouse_id: Value,

    #[serde(default)]
    #[validate(custom(function = "validate_quantity"))]
    #[schema(value_type = i32, example = 500)]
    pub quantity: Value,

    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "Television")]
    pub item_name: Option<String>,

    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "This 50\", 4K LED TV provides a crystal-clear picture.")]
    pub description: Option<String>,

    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "Electronics")]
    pub category: Option<String>,

    #[schema(example = "In Stock")]
    pub status: Option<String>,
}

impl CreateInventoryPayload {
    pub fn into_record(self) -> Result<(Uuid, InventoryRecord), AppError> {
        self.validate()
            .map_err(|e| AppError::first_in_order(e, &CREATE_FIELD_ORDER))?;

        let warehouse_id = parse_warehouse_id(&self.warehouse_id)
            .ok_or_else(|| AppError::InvalidField(CHOOSE_WAREHOUSE.to_string()))?;
        let record = item_record(
            self.item_name,
            self.description,
            self.category,
            self.status,
            &self.quantity,
        )?;

        Ok((warehouse_id, record))
    }
}

// ---
// Payload: UpdateInventory (o armazém vem pelo nome)
// ---
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInventoryPayload {
    #[validate(
        required(message = "Please choose a warehouse"),
        length(min = 1, message = "Please choose a warehouse")
    )]
    #[schema(example = "Manhattan")]
    pub warehouse_name: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_quantity"))]
    #[schema(value_type = i32, example = 500)]
    pub quantity: Value,

    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "Television")]
    pub item_name: Option<String>,

    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "This 50\", 4K LED TV provides a crystal-clear picture.")]
    pub description: Option<String>,

    #[validate(
        required(message = "Please fill out all form details"),
        length(min = 1, message = "Please fill out all form details")
    )]
    #[schema(example = "Electronics")]
    pub category: Option<String>,

    #[schema(example = "Out of Stock")]
    pub status: Option<String>,
}

impl UpdateInventoryPayload {
    pub fn into_record(self) -> Result<(String, InventoryRecord), AppError> {
        self.validate()
            .map_err(|e| AppError::first_in_order(e, &UPDATE_FIELD_ORDER))?;

        let warehouse_name = self
            .warehouse_name
            .ok_or_else(|| AppError::InvalidField(CHOOSE_WAREHOUSE.to_string()))?;
        let record = item_record(
            self.item_name,
            self.description,
            self.category,
            self.status,
            &self.quantity,
        )?;

        Ok((warehouse_name, record))
    }
}

// GET /inventories
#[utoipa::path(
    get,
    path = "/inventories",
    tag = "Inventories",
    responses(
        (status = 200, description = "Itens com o nome do armazém", body = Vec<InventoryDetail>),
        (status = 404, description = "Falha ao consultar", body = MessageResponse)
    )
)]
pub async fn list_inventories(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let items = app_state
        .inventory_service
        .list_items()
        .await
        .map_err(|e| e.to_api_error(LIST_FAILURE))?;

    Ok((StatusCode::OK, Json(items)))
}

// GET /inventories/{id}
#[utoipa::path(
    get,
    path = "/inventories/{id}",
    tag = "Inventories",
    params(("id" = Uuid, Path, description = "ID do item")),
    responses(
        (status = 200, description = "Item com o nome do armazém", body = InventoryDetail),
        (status = 404, description = "Item não encontrado", body = MessageResponse)
    )
)]
pub async fn get_inventory(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let item = app_state
        .inventory_service
        .get_item(id)
        .await
        .map_err(|e| e.to_api_error(GET_FAILURE))?;

    Ok((StatusCode::OK, Json(item)))
}

// POST /inventories
#[utoipa::path(
    post,
    path = "/inventories",
    tag = "Inventories",
    request_body = CreateInventoryPayload,
    responses(
        (status = 200, description = "Item criado", body = InventoryItem),
        (status = 400, description = "Armazém, quantidade ou campos inválidos", body = MessageResponse),
        (status = 404, description = "Armazém inexistente ou falha ao inserir", body = MessageResponse)
    )
)]
pub async fn create_inventory(
    State(app_state): State<AppState>,
    AppJson(payload): AppJson<CreateInventoryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let (warehouse_id, record) = payload
        .into_record()
        .map_err(|e| e.to_api_error(CREATE_FAILURE))?;

    let item = app_state
        .inventory_service
        .create_item(warehouse_id, &record)
        .await
        .map_err(|e| e.to_api_error(CREATE_FAILURE))?;

    Ok((StatusCode::OK, Json(item)))
}

// PUT /inventories/{id}
#[utoipa::path(
    put,
    path = "/inventories/{id}",
    tag = "Inventories",
    request_body = UpdateInventoryPayload,
    params(("id" = Uuid, Path, description = "ID do item")),
    responses(
        (status = 200, description = "Item atualizado", body = InventoryItem),
        (status = 400, description = "Campos inválidos", body = MessageResponse),
        (status = 404, description = "Armazém ou item não encontrado", body = MessageResponse),
        (status = 500, description = "Falha na transação", body = MessageResponse)
    )
)]
pub async fn update_inventory(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateInventoryPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let (warehouse_name, record) = payload
        .into_record()
        .map_err(|e| e.to_api_error(UPDATE_FAILURE))?;

    let item = app_state
        .inventory_service
        .update_item(id, &warehouse_name, &record)
        .await
        .map_err(|e| e.to_api_error(UPDATE_FAILURE))?;

    Ok((StatusCode::OK, Json(item)))
}

// DELETE /inventories/{id}
// Responde 200 mesmo quando o id não existia.
#[utoipa::path(
    delete,
    path = "/inventories/{id}",
    tag = "Inventories",
    params(("id" = Uuid, Path, description = "ID do item")),
    responses(
        (status = 200, description = "Item removido", body = MessageResponse),
        (status = 400, description = "Falha ao remover", body = MessageResponse)
    )
)]
pub async fn delete_inventory(
    State(app_state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    app_state
        .inventory_service
        .delete_item(id)
        .await
        .map_err(|e| e.to_api_error(DELETE_FAILURE))?;

    let body = MessageResponse { message: "Successfully deleted item".to_string() };
    Ok((StatusCode::OK, Json(body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn create_body() -> Value {
        json!({
            "warehouse_id": "6f1d2a4e-3b7c-4d8e-9f10-112233445566",
            "quantity": 5,
            "item_name": "TV",
            "description": "50 inch",
            "category": "Electronics"
        })
    }

    fn create_message(body: Value) -> String {
        let payload: CreateInventoryPayload = serde_json::from_value(body).unwrap();
        let err = payload.into_record().unwrap_err();
        let api = err.to_api_error(CREATE_FAILURE);
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        api.message
    }

    #[test]
    fn quantity_accepts_non_negative_numbers_and_numeric_strings() {
        assert_eq!(parse_quantity(&json!(0)), Some(0));
        assert_eq!(parse_quantity(&json!(42)), Some(42));
        assert_eq!(parse_quantity(&json!(7.0)), Some(7));
        assert_eq!(parse_quantity(&json!(" 12 ")), Some(12));

        assert_eq!(parse_quantity(&json!(-1)), None);
        assert_eq!(parse_quantity(&json!("-3")), None);
        assert_eq!(parse_quantity(&json!(1.5)), None);
        assert_eq!(parse_quantity(&json!("abc")), None);
        assert_eq!(parse_quantity(&json!(null)), None);
        assert_eq!(parse_quantity(&json!(true)), None);
        assert_eq!(parse_quantity(&json!(5_000_000_000_i64)), None);
    }

    #[test]
    fn blank_or_mistyped_warehouse_counts_as_not_chosen() {
        for warehouse_id in [json!(""), json!("   "), json!(1), json!("not-a-uuid"), json!(null)] {
            let mut body = create_body();
            body["warehouse_id"] = warehouse_id.clone();
            assert_eq!(create_message(body), CHOOSE_WAREHOUSE, "warehouse_id = {warehouse_id}");
        }
    }

    #[test]
    fn valid_create_payload_defaults_status() {
        let payload: CreateInventoryPayload = serde_json::from_value(create_body()).unwrap();
        let (warehouse_id, record) = payload.into_record().unwrap();

        assert_eq!(warehouse_id.to_string(), "6f1d2a4e-3b7c-4d8e-9f10-112233445566");
        assert_eq!(record.quantity, 5);
        assert_eq!(record.status, DEFAULT_STATUS);
    }

    #[test]
    fn missing_warehouse_is_reported_first() {
        let mut body = create_body();
        let obj = body.as_object_mut().unwrap();
        obj.remove("warehouse_id");
        obj.insert("quantity".into(), json!(-1));
        obj.remove("item_name");

        assert_eq!(create_message(body), CHOOSE_WAREHOUSE);
    }

    #[test]
    fn bad_quantity_is_reported_before_missing_fields() {
        let mut body = create_body();
        body["quantity"] = json!(-1);
        body.as_object_mut().unwrap().remove("category");
        assert_eq!(create_message(body), QUANTITY_RANGE);

        let mut body = create_body();
        body["quantity"] = json!("lots");
        assert_eq!(create_message(body), QUANTITY_RANGE);

        let mut body = create_body();
        body.as_object_mut().unwrap().remove("quantity");
        assert_eq!(create_message(body), QUANTITY_RANGE);
    }

    #[test]
    fn missing_item_fields_are_reported_last() {
        for field in ["item_name", "description", "category"] {
            let mut body = create_body();
            body[field] = json!("");
            assert_eq!(create_message(body), "Please fill out all form details");
        }
    }

    #[test]
    fn update_payload_requires_warehouse_name() {
        let payload: UpdateInventoryPayload = serde_json::from_value(json!({
            "warehouse_name": "",
            "quantity": 1,
            "item_name": "TV",
            "description": "50 inch",
            "category": "Electronics",
            "status": "Out of Stock"
        }))
        .unwrap();
        let api = payload.into_record().unwrap_err().to_api_error(UPDATE_FAILURE);
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.message, CHOOSE_WAREHOUSE);
    }

    #[test]
    fn update_payload_keeps_given_status() {
        let payload: UpdateInventoryPayload = serde_json::from_value(json!({
            "warehouse_name": "Manhattan",
            "quantity": "0",
            "item_name": "TV",
            "description": "50 inch",
            "category": "Electronics",
            "status": "Out of Stock"
        }))
        .unwrap();
        let (name, record) = payload.into_record().unwrap();
        assert_eq!(name, "Manhattan");
        assert_eq!(record.quantity, 0);
        assert_eq!(record.status, "Out of Stock");
    }
}
