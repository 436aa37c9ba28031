//! JSON API over the read-only catalog and the order total calculator

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quickdeliver_core::catalog::{self, Order, Product, Store};
use quickdeliver_core::search::RatingThreshold;
use quickdeliver_core::{
    checked_discount, checked_quantity, compute_totals, CoreError, DeliveryTier, LineItem, Money,
    OrderTotals, ProductId, StoreFilter, StoreId,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

/// Shared router state: the catalog is static, so this only carries metadata
#[derive(Debug, Clone)]
pub struct ApiState {
    pub version: &'static str,
}

impl Default for ApiState {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

pub type SharedState = Arc<ApiState>;

/// Error body `{"error": "..."}` with 404 for missed lookups, 400 otherwise
#[derive(Debug)]
pub struct ApiError(CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::BAD_REQUEST
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": state.version,
        "stores": catalog::stores().len(),
        "products": catalog::products().len(),
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct StoreQuery {
    q: Option<String>,
    category: Option<String>,
    min_rating: Option<String>,
}

pub async fn stores(Query(query): Query<StoreQuery>) -> Result<Json<Vec<&'static Store>>, ApiError> {
    let mut filter = StoreFilter::with_query(query.q.unwrap_or_default());
    filter.category = query.category.filter(|c| c != "All");
    if let Some(min) = query.min_rating {
        filter.min_rating = min.parse::<RatingThreshold>()?;
    }
    let found = filter.run();
    debug!(query = %filter.query, results = found.len(), "store search");
    Ok(Json(found))
}

fn lookup_store(id: u32) -> Result<&'static Store, ApiError> {
    catalog::store_by_id(StoreId::new(id)).ok_or_else(|| {
        CoreError::StoreNotFound {
            id: id.to_string(),
        }
        .into()
    })
}

pub async fn store(Path(id): Path<u32>) -> Result<Json<&'static Store>, ApiError> {
    lookup_store(id).map(Json)
}

pub async fn store_products(Path(id): Path<u32>) -> Result<Json<Vec<&'static Product>>, ApiError> {
    let store = lookup_store(id)?;
    Ok(Json(catalog::products_for(store.id)))
}

pub async fn orders() -> Json<&'static [Order]> {
    Json(catalog::orders())
}

#[derive(Debug, Deserialize)]
pub struct QuoteLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub items: Vec<QuoteLine>,
    #[serde(default)]
    pub tier: DeliveryTier,
    #[serde(default)]
    pub discount: Money,
}

/// Price a basket without touching any session state
pub async fn quote(Json(request): Json<QuoteRequest>) -> Result<Json<OrderTotals>, ApiError> {
    let discount = checked_discount(request.discount)?;
    let items = request
        .items
        .iter()
        .map(|line| {
            let quantity = checked_quantity(line.product_id, line.quantity)?;
            let product = catalog::product_by_id(line.product_id).ok_or_else(|| {
                CoreError::ProductNotFound {
                    id: line.product_id.to_string(),
                }
            })?;
            let store = catalog::store_or_default(Some(product.store_id));
            Ok(LineItem::new(
                product.id,
                product.name.clone(),
                store.name.clone(),
                product.price,
                quantity,
            ))
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(Json(compute_totals(&items, request.tier, discount)))
}
