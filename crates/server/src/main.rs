#[tokio::main]
async fn main() -> anyhow::Result<()> {
    landing_server::run().await
}
