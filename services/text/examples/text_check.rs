//! Check one text against the online endpoint.
//!
//! ```shell
//! YIDUN_SECRET_ID=... YIDUN_SECRET_KEY=... YIDUN_BUSINESS_ID=... \
//!     cargo run --example text_check
//! ```

use anyhow::{Context as _, Result};
use yidun_core::types::Suggestion;
use yidun_core::{Context, EnvCredentialProvider, OsEnv, ProvideCredential};
use yidun_http_send_reqwest::ReqwestHttpSend;
use yidun_text::{TextCheckRequest, TextClient};

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
    let client = TextClient::new(ctx, credential);

    let resp = client
        .check(TextCheckRequest::new("demo-0001", "content to moderate"))
        .await?;

    if resp.code != 200 {
        println!("ERROR: code={}, msg={}", resp.code, resp.msg);
        return Ok(());
    }

    let result = resp.result.unwrap_or_default();
    match result.action {
        Suggestion::Pass => println!("taskId: {}, passed", result.task_id),
        Suggestion::Review => println!(
            "taskId: {}, suspicious, labels: {:?}",
            result.task_id, result.labels
        ),
        Suggestion::Reject => println!(
            "taskId: {}, rejected, labels: {:?}",
            result.task_id, result.labels
        ),
        Suggestion::Other(code) => println!("taskId: {}, verdict {}", result.task_id, code),
    }

    Ok(())
}
