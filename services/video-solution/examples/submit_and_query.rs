//! Submit one audio-video URL and query its verdict right away.
//!
//! The query will usually report the task as still in progress; poll it (or
//! use the callback endpoint) in real deployments.
//!
//! ```shell
//! YIDUN_SECRET_ID=... YIDUN_SECRET_KEY=... \
//!     cargo run --example submit_and_query
//! ```

use anyhow::{Context as _, Result};
use yidun_core::{Context, EnvCredentialProvider, OsEnv, ProvideCredential};
use yidun_http_send_reqwest::ReqwestHttpSend;
use yidun_video_solution::{SolutionSubmitRequest, VideoSolutionClient};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let credential = EnvCredentialProvider
        .provide_credential(&ctx)
        .await?
        .context("YIDUN_SECRET_ID / YIDUN_SECRET_KEY must be set")?;
    let client = VideoSolutionClient::new(ctx, credential);

    let resp = client
        .submit(SolutionSubmitRequest::new(
            "demo-0001",
            "https://example.com/video.mp4",
        ))
        .await?;
    if resp.code != 200 {
        println!("SUBMIT ERROR: code={}, msg={}", resp.code, resp.msg);
        return Ok(());
    }
    let receipt = resp.result.context("accepted submit carries a receipt")?;
    println!("submitted, taskId: {}", receipt.task_id);

    let resp = client.query(&[receipt.task_id.as_str()]).await?;
    for entry in &resp.result {
        match entry.status {
            0 => println!("taskId: {}, result: {:?}", entry.task_id, entry.result),
            20 => println!("taskId: {}, expired", entry.task_id),
            30 => println!("taskId: {}, unknown (likely still running)", entry.task_id),
            other => println!("taskId: {}, status {}", entry.task_id, other),
        }
    }
    Ok(())
}
