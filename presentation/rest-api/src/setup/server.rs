use poem::{
    EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing, post,
};
use poem_openapi::OpenApiService;

use crate::api::scan::routes::{method_not_allowed, scan_card};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(container.health_api, "Card Scanner API", "0.1.0")
            .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .at("/scan-card", post(scan_card))
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .catch_error(method_not_allowed)
            .data(container.scan_use_case)
            .with(config.cors)
            .with(Tracing);
        println!("Server running at http://{}", addr);
        println!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
