pub mod app_state_builder;
pub mod auth_helper;
pub mod stubs;

use actix_web::dev::{HttpServiceFactory, ServiceResponse};
use actix_web::{test, web, App};

use crate::shared::api::{custom_json_config, custom_query_config};
use crate::AppState;

/// Mounts a single handler with the same app data as the real server and
/// sends one request through it.
pub async fn send<F>(state: AppState, handler: F, req: test::TestRequest) -> ServiceResponse
where
    F: HttpServiceFactory + 'static,
{
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(web::Data::new(auth_helper::test_token_provider()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(handler),
    )
    .await;

    test::call_service(&app, req.to_request()).await
}
