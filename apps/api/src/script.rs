//! Console review of a local PDF, for trying the service without the web form.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::encode::encode_document;
use crate::llm_client::DocumentReviewer;

/// File reviewed by the `review-local` binary, relative to the working directory.
pub const LOCAL_PDF_PATH: &str = "./pdfs/resume.pdf";

const RULE: &str = "==================================================";

/// Runs one review of the PDF at `pdf_path`, printing progress to `out`.
///
/// The reviewer is only built once configuration has loaded and the file has
/// been read. Every failure is printed and then returned.
pub async fn run<C, F, R, W>(load_config: C, pdf_path: &Path, make_reviewer: F, out: &mut W) -> Result<()>
where
    C: FnOnce() -> Result<Config>,
    F: FnOnce(&Config) -> Result<R>,
    R: DocumentReviewer,
    W: Write,
{
    writeln!(out, "Loading environment variables...")?;
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            writeln!(out, "Error loading configuration: {e:#}")?;
            return Err(e);
        }
    };
    writeln!(out, "Environment variables loaded")?;

    writeln!(out, "\nReading local PDF...")?;
    let payload = match read_and_encode(pdf_path) {
        Ok(payload) => payload,
        Err(e) => {
            writeln!(out, "Error reading the PDF: {e:#}")?;
            return Err(e);
        }
    };
    writeln!(out, "PDF read and encoded")?;

    writeln!(out, "\nConnecting to the analysis service...")?;
    let reviewer = match make_reviewer(&config) {
        Ok(reviewer) => reviewer,
        Err(e) => {
            writeln!(out, "Error connecting to the analysis service: {e:#}")?;
            return Err(e);
        }
    };
    writeln!(out, "Connected (model: {})", config.analysis.model)?;

    writeln!(out, "\nSending document for analysis...")?;
    let response = match reviewer.review(&payload).await {
        Ok(response) => response,
        Err(e) => {
            writeln!(out, "\nError processing the document: {e}")?;
            return Err(e.into());
        }
    };

    writeln!(out, "\nResponse received:")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{:#?}", response.content)?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

fn read_and_encode(pdf_path: &Path) -> Result<String> {
    if !pdf_path.exists() {
        bail!("file not found at: {}", pdf_path.display());
    }
    let bytes =
        std::fs::read(pdf_path).with_context(|| format!("reading {}", pdf_path.display()))?;
    Ok(encode_document(&bytes))
}
