mod application;
mod domain;
mod infrastructure;
#[cfg(test)]
mod test_support;

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use application::resize_service::ResizeService;
use domain::resize_job::{ResizeJob, COMPLETION_MESSAGE, INPUT_PATH, OUTPUT_DIR};
use infrastructure::file_storage::LocalFileStorage;
use infrastructure::image_processor::DefaultImageProcessor;

// hero-bg.jpg から 640px / 1024px 幅の JPEG を生成する
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // ログは stderr。RUST_LOG=debug で詳細
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let jobs = ResizeJob::hero_jobs(Path::new(OUTPUT_DIR))?;
    let service = ResizeService::new(Arc::new(DefaultImageProcessor::new()), LocalFileStorage::new());

    service.resize_hero_image(Path::new(INPUT_PATH), &jobs).await?;

    println!("{}", COMPLETION_MESSAGE);
    Ok(())
}
