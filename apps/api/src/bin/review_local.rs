//! Reviews `./pdfs/resume.pdf` and prints the raw response. Exits non-zero on any failure.

use std::path::Path;

use anyhow::Result;

use resume_reviewer::config::Config;
use resume_reviewer::llm_client::LlmClient;
use resume_reviewer::logging::init_tracing;
use resume_reviewer::script::{self, LOCAL_PDF_PATH};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("warn");

    let mut stdout = std::io::stdout();
    script::run(
        Config::from_env,
        Path::new(LOCAL_PDF_PATH),
        |config| Ok(LlmClient::from_config(config)?),
        &mut stdout,
    )
    .await
}
