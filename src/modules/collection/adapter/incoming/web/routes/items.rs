use actix_web::{delete, post, put, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::collection::application::domain::entities::ItemPlacement;
use crate::modules::collection::application::ports::incoming::use_cases::{
    AddCollectionItemError, AddCollectionItemInput, RemoveCollectionItemError,
    ReorderCollectionItemsError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemRequest {
    pub product_id: Uuid,
    /// 0-based; appended when omitted, clamped to the end when too large
    pub position: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReorderItemsRequest {
    /// Every current product id exactly once, in the new order
    pub product_ids: Vec<Uuid>,
}

fn not_owner() -> actix_web::HttpResponse {
    ApiResponse::forbidden("NOT_OWNER", "Only the collection owner can do this")
}

fn collection_not_found() -> actix_web::HttpResponse {
    ApiResponse::not_found("COLLECTION_NOT_FOUND", "Collection not found")
}

/// Add a product to a collection
#[utoipa::path(
    post,
    path = "/api/collections/{collection_id}/products",
    tag = "collections",
    security(("bearer_auth" = [])),
    params(("collection_id" = Uuid, Path, description = "Collection id")),
    request_body = AddItemRequest,
    responses(
        (status = 201, description = "Item added", body = inline(SuccessResponse<ItemPlacement>)),
        (status = 400, description = "Invalid position", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Collection or product not found", body = ErrorResponse),
        (status = 409, description = "Product already in collection", body = ErrorResponse),
    )
)]
#[post("/api/collections/{collection_id}/products")]
pub async fn add_collection_item_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddItemRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection_id = path.into_inner();
    let req = req.into_inner();

    match data
        .collection
        .add_item
        .execute(
            user.actor(),
            collection_id,
            AddCollectionItemInput {
                product_id: req.product_id,
                position: req.position,
            },
        )
        .await
    {
        Ok(placement) => {
            info!(
                collection_id = %collection_id,
                product_id = %placement.product_id,
                position = placement.position,
                "Item added to collection"
            );
            ApiResponse::created(placement)
        }
        Err(AddCollectionItemError::InvalidInput(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }
        Err(AddCollectionItemError::NotFound) => collection_not_found(),
        Err(AddCollectionItemError::NotOwner) => not_owner(),
        Err(AddCollectionItemError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }
        Err(e @ AddCollectionItemError::AlreadyInCollection) => {
            ApiResponse::conflict("ALREADY_IN_COLLECTION", &e.to_string())
        }
        Err(AddCollectionItemError::RepositoryError(e)) => {
            error!(collection_id = %collection_id, error = %e, "Failed to add collection item");
            ApiResponse::internal_error()
        }
    }
}

/// Remove a product from a collection; later items move up
#[utoipa::path(
    delete,
    path = "/api/collections/{collection_id}/products/{product_id}",
    tag = "collections",
    security(("bearer_auth" = [])),
    params(
        ("collection_id" = Uuid, Path, description = "Collection id"),
        ("product_id" = Uuid, Path, description = "Product id"),
    ),
    responses(
        (status = 204, description = "Item removed"),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Collection or item not found", body = ErrorResponse),
    )
)]
#[delete("/api/collections/{collection_id}/products/{product_id}")]
pub async fn remove_collection_item_handler(
    user: AuthenticatedUser,
    path: web::Path<(Uuid, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (collection_id, product_id) = path.into_inner();

    match data
        .collection
        .remove_item
        .execute(user.actor(), collection_id, product_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(RemoveCollectionItemError::NotFound) => collection_not_found(),
        Err(RemoveCollectionItemError::NotOwner) => not_owner(),
        Err(RemoveCollectionItemError::ItemNotFound) => {
            ApiResponse::not_found("ITEM_NOT_FOUND", "Product is not in this collection")
        }
        Err(RemoveCollectionItemError::RepositoryError(e)) => {
            error!(collection_id = %collection_id, error = %e, "Failed to remove collection item");
            ApiResponse::internal_error()
        }
    }
}

/// Replace the item order
#[utoipa::path(
    put,
    path = "/api/collections/{collection_id}/products/order",
    tag = "collections",
    security(("bearer_auth" = [])),
    params(("collection_id" = Uuid, Path, description = "Collection id")),
    request_body = ReorderItemsRequest,
    responses(
        (status = 200, description = "New order", body = inline(SuccessResponse<Vec<ItemPlacement>>)),
        (status = 400, description = "Not a permutation of the current items", body = ErrorResponse),
        (status = 403, description = "Not the owner", body = ErrorResponse),
        (status = 404, description = "Collection not found", body = ErrorResponse),
    )
)]
#[put("/api/collections/{collection_id}/products/order")]
pub async fn reorder_collection_items_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<ReorderItemsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection_id = path.into_inner();

    match data
        .collection
        .reorder_items
        .execute(user.actor(), collection_id, req.into_inner().product_ids)
        .await
    {
        Ok(placements) => ApiResponse::success(placements),
        Err(ReorderCollectionItemsError::InvalidOrder(msg)) => {
            ApiResponse::bad_request("INVALID_ORDER", &msg)
        }
        Err(ReorderCollectionItemsError::NotFound) => collection_not_found(),
        Err(ReorderCollectionItemsError::NotOwner) => not_owner(),
        Err(ReorderCollectionItemsError::RepositoryError(e)) => {
            error!(collection_id = %collection_id, error = %e, "Failed to reorder collection");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::auth::application::domain::entities::{Actor, UserRole};
    use crate::modules::collection::application::ports::incoming::use_cases::{
        AddCollectionItemUseCase, RemoveCollectionItemUseCase, ReorderCollectionItemsUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::bearer;
    use crate::tests::support::send;

    struct FixedAdd(Result<i32, AddCollectionItemError>);

    #[async_trait]
    impl AddCollectionItemUseCase for FixedAdd {
        async fn execute(
            &self,
            _actor: Actor,
            collection_id: Uuid,
            input: AddCollectionItemInput,
        ) -> Result<ItemPlacement, AddCollectionItemError> {
            self.0.clone().map(|position| ItemPlacement {
                collection_id,
                product_id: input.product_id,
                position,
            })
        }
    }

    struct FixedRemove(Result<(), RemoveCollectionItemError>);

    #[async_trait]
    impl RemoveCollectionItemUseCase for FixedRemove {
        async fn execute(
            &self,
            _actor: Actor,
            _collection_id: Uuid,
            _product_id: Uuid,
        ) -> Result<(), RemoveCollectionItemError> {
            self.0.clone()
        }
    }

    struct FixedReorder(Result<(), ReorderCollectionItemsError>);

    #[async_trait]
    impl ReorderCollectionItemsUseCase for FixedReorder {
        async fn execute(
            &self,
            _actor: Actor,
            collection_id: Uuid,
            product_ids: Vec<Uuid>,
        ) -> Result<Vec<ItemPlacement>, ReorderCollectionItemsError> {
            self.0.clone().map(|_| {
                product_ids
                    .into_iter()
                    .zip(0..)
                    .map(|(product_id, position)| ItemPlacement {
                        collection_id,
                        product_id,
                        position,
                    })
                    .collect()
            })
        }
    }

    fn add_request() -> test::TestRequest {
        test::TestRequest::post()
            .uri(&format!("/api/collections/{}/products", Uuid::new_v4()))
            .insert_header(("Authorization", bearer(Uuid::new_v4(), UserRole::Creator)))
            .set_json(json!({"product_id": Uuid::new_v4(), "position": 0}))
    }

    #[actix_web::test]
    async fn test_add_item_returns_placement() {
        let state = TestAppStateBuilder::default()
            .with_add_collection_item(FixedAdd(Ok(0)))
            .build();

        let resp = send(state, add_collection_item_handler, add_request()).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["position"], 0);
    }

    #[actix_web::test]
    async fn test_add_duplicate_is_409() {
        let state = TestAppStateBuilder::default()
            .with_add_collection_item(FixedAdd(Err(AddCollectionItemError::AlreadyInCollection)))
            .build();

        let resp = send(state, add_collection_item_handler, add_request()).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ALREADY_IN_COLLECTION");
    }

    #[actix_web::test]
    async fn test_add_to_foreign_collection_is_403() {
        let state = TestAppStateBuilder::default()
            .with_add_collection_item(FixedAdd(Err(AddCollectionItemError::NotOwner)))
            .build();

        let resp = send(state, add_collection_item_handler, add_request()).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_remove_missing_item_is_404() {
        let state = TestAppStateBuilder::default()
            .with_remove_collection_item(FixedRemove(Err(RemoveCollectionItemError::ItemNotFound)))
            .build();

        let resp = send(
            state,
            remove_collection_item_handler,
            test::TestRequest::delete()
                .uri(&format!(
                    "/api/collections/{}/products/{}",
                    Uuid::new_v4(),
                    Uuid::new_v4()
                ))
                .insert_header(("Authorization", bearer(Uuid::new_v4(), UserRole::Creator))),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "ITEM_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_reorder_returns_new_positions() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let state = TestAppStateBuilder::default()
            .with_reorder_collection_items(FixedReorder(Ok(())))
            .build();

        let resp = send(
            state,
            reorder_collection_items_handler,
            test::TestRequest::put()
                .uri(&format!("/api/collections/{}/products/order", Uuid::new_v4()))
                .insert_header(("Authorization", bearer(Uuid::new_v4(), UserRole::Creator)))
                .set_json(json!({"product_ids": [b, a]})),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["product_id"], b.to_string());
        assert_eq!(body["data"][1]["position"], 1);
    }

    #[actix_web::test]
    async fn test_reorder_rejects_bad_permutation() {
        let state = TestAppStateBuilder::default()
            .with_reorder_collection_items(FixedReorder(Err(
                ReorderCollectionItemsError::InvalidOrder("duplicate product".to_string()),
            )))
            .build();

        let resp = send(
            state,
            reorder_collection_items_handler,
            test::TestRequest::put()
                .uri(&format!("/api/collections/{}/products/order", Uuid::new_v4()))
                .insert_header(("Authorization", bearer(Uuid::new_v4(), UserRole::Creator)))
                .set_json(json!({"product_ids": []})),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_ORDER");
    }
}
