#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    liveclass_backend::run().await;
}
