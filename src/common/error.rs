// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

// Nosso tipo de erro de domínio, com `thiserror` para melhor ergonomia.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] ValidationErrors),

    // Falha de validação já resolvida para uma única mensagem (ordem de campos importa)
    #[error("{0}")]
    InvalidField(String),

    #[error("Warehouse not found")]
    WarehouseNotFound,

    #[error("Warehouse ID not found")]
    WarehouseIdNotFound,

    #[error("Item not found")]
    ItemNotFound,

    // Variante para erros de banco de dados
    #[error("Erro de banco de dados: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

/// Status e mensagem que uma rota devolve quando a persistência falha.
///
/// Cada rota escolhe o seu par (alguns clientes esperam 404, outros 500),
/// por isso o handler passa isto para `AppError::to_api_error`.
#[derive(Debug, Clone, Copy)]
pub struct RouteFailure {
    pub status: StatusCode,
    pub message: &'static str,
}

impl RouteFailure {
    pub const fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }
}

// O erro "de borda", já pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

// Corpo padrão das respostas de erro (e de algumas respostas de sucesso)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Warehouse not found")]
    pub message: String,
}

impl AppError {
    /// Reduz os erros do `validator` à mensagem do primeiro campo, na ordem dada.
    /// A ordem importa porque o cliente mostra só uma mensagem por vez.
    pub fn first_in_order(errors: ValidationErrors, order: &[&str]) -> Self {
        let message = {
            let field_errors = errors.field_errors();
            order.iter().find_map(|field| {
                field_errors
                    .get(*field)
                    .and_then(|errs| errs.iter().find_map(|e| e.message.as_ref()))
                    .map(|m| m.to_string())
            })
        };

        match message {
            Some(message) => AppError::InvalidField(message),
            None => AppError::ValidationError(errors),
        }
    }

    /// Traduz o erro de domínio para a resposta da rota, registrando-o no log.
    pub fn to_api_error(self, failure: RouteFailure) -> ApiError {
        match self {
            AppError::ValidationError(errors) => {
                let message = first_validation_message(&errors)
                    .unwrap_or_else(|| "Please fill out all form details".to_string());
                tracing::warn!("Payload inválido: {}", message);
                ApiError::new(StatusCode::BAD_REQUEST, message)
            }
            AppError::InvalidField(message) => {
                tracing::warn!("Payload inválido: {}", message);
                ApiError::new(StatusCode::BAD_REQUEST, message)
            }
            e @ (AppError::WarehouseNotFound
            | AppError::WarehouseIdNotFound
            | AppError::ItemNotFound) => {
                tracing::warn!("{}", e);
                ApiError::new(StatusCode::NOT_FOUND, e.to_string())
            }
            // Erros de banco usam o status escolhido pela rota.
            e @ AppError::DatabaseError(_) => {
                tracing::error!("{}: {}", failure.message, e);
                ApiError::new(failure.status, failure.message)
            }
        }
    }
}

// Mensagem determinística: o primeiro campo em ordem alfabética que tiver mensagem.
fn first_validation_message(errors: &ValidationErrors) -> Option<String> {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.keys().collect();
    fields.sort();

    fields.into_iter().find_map(|field| {
        field_errors
            .get(field)
            .and_then(|errs| errs.iter().find_map(|e| e.message.as_ref()))
            .map(|m| m.to_string())
    })
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(MessageResponse { message: self.message });
        (self.status, body).into_response()
    }
}
