use anyhow::{Context, Result};
use catalog_service::{
    build_app,
    infrastructure::{config::load_config, logger::Logger},
    server::shutdown_signal,
    AppState, CatalogStore,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config().context("加载配置失败")?;
    Logger::init(&config.logging.level);

    let store = CatalogStore::with_mock_data();
    info!("✅ 已加载 {} 个模拟商品", store.len());

    let app = build_app(AppState::new(store), config.request_timeout());

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 商品目录服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET /api/catalog/products              - 可售商品列表");
    info!("   GET /api/catalog/products/:id          - 获取商品");
    info!("   GET /api/catalog/products/:id/stock    - 检查库存 (?quantity=N)");
    info!("   GET /api/catalog/products/:id/details  - 商品详情");
    info!("   GET /health                            - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    Ok(())
}
