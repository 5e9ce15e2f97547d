#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = classportal_rust::run().await {
        eprintln!("classportal-rust fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
