use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::analytics::adapter::incoming::web::routes as analytics;
use crate::modules::auth::adapter::incoming::web::routes as auth;
use crate::modules::catalog::adapter::incoming::web::routes as catalog;
use crate::modules::collection::adapter::incoming::web::routes as collection;
use crate::modules::engagement::adapter::incoming::web::routes as engagement;
use crate::modules::media::adapter::incoming::web::routes as media;
use crate::modules::search::adapter::incoming::web::routes as search;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stash API",
        version = "1.0.0",
        description = "Shoppable collections, product catalog and creator analytics"
    ),
    paths(
        auth::register_user_handler,
        auth::login_user_handler,
        auth::get_me_handler,
        auth::get_user_profile_handler,
        auth::update_profile_handler,
        catalog::create_brand_handler,
        catalog::get_brand_handler,
        catalog::create_product_handler,
        catalog::get_product_handler,
        catalog::scrape_product_handler,
        catalog::get_product_summary_handler,
        catalog::list_categories_handler,
        catalog::create_category_handler,
        catalog::create_campaign_handler,
        catalog::get_campaign_handler,
        catalog::link_campaign_product_handler,
        collection::create_collection_handler,
        collection::get_collection_handler,
        collection::list_collections_handler,
        collection::list_user_collections_handler,
        collection::update_collection_handler,
        collection::delete_collection_handler,
        collection::add_collection_item_handler,
        collection::remove_collection_item_handler,
        collection::reorder_collection_items_handler,
        engagement::like_collection_handler,
        engagement::unlike_collection_handler,
        engagement::follow_user_handler,
        engagement::unfollow_user_handler,
        engagement::list_followers_handler,
        engagement::list_following_handler,
        engagement::list_comments_handler,
        engagement::add_comment_handler,
        engagement::delete_comment_handler,
        engagement::record_view_handler,
        engagement::product_click_handler,
        engagement::collection_click_handler,
        search::search_handler,
        analytics::brand_report_handler,
        analytics::creator_report_handler,
        media::upload_image_handler,
    ),
    components(schemas(ErrorResponse, ErrorDetail)),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Public profiles and profile edits"),
        (name = "catalog", description = "Brands, products, categories and campaigns"),
        (name = "collections", description = "Curated product collections"),
        (name = "engagement", description = "Likes, follows, comments and click tracking"),
        (name = "search", description = "Full-text search"),
        (name = "analytics", description = "Brand and creator reports"),
        (name = "media", description = "Image uploads"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
