use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Página no encontrada",
            "404",
            "Página no encontrada",
            "Lo sentimos, no pudimos encontrar esa página.",
        ),
    )
        .into_response()
}
