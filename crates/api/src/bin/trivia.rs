use trio_core::service::Service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trio_api::server::run(Service::Trivia).await
}
