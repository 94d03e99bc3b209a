//! README template loading, placeholder substitution and output.
//!
//! Templates are handled as raw bytes: only the placeholder is replaced,
//! everything around it is written back untouched.

use crate::config::{GenOptions, Output};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use tracing::info;

/// Token in the README template replaced by the collected body.
pub const PLACEHOLDER: &str = "{{pgkFuncs}}";

/// Read the README template. Required whenever a template dir is configured.
pub fn load_template(opts: &GenOptions) -> Result<Option<Vec<u8>>> {
    let Some(path) = opts.tpl_filepath() else {
        return Ok(None);
    };

    info!("read template file contents from {}", path.display());
    let body = fs::read(&path)
        .with_context(|| format!("failed to read template file: {}", path.display()))?;
    Ok(Some(body))
}

/// Splice `body` into the template's first placeholder, or return it as-is.
pub fn assemble(template: Option<&[u8]>, body: &str) -> Vec<u8> {
    let tpl = match template {
        Some(tpl) if !tpl.is_empty() => tpl,
        _ => return body.as_bytes().to_vec(),
    };

    let token = PLACEHOLDER.as_bytes();
    match tpl.windows(token.len()).position(|w| w == token) {
        Some(at) => {
            let mut out = Vec::with_capacity(tpl.len() + body.len());
            out.extend_from_slice(&tpl[..at]);
            out.extend_from_slice(body.as_bytes());
            out.extend_from_slice(&tpl[at + token.len()..]);
            out
        }
        None => tpl.to_vec(),
    }
}

/// Write the final document to a file (created or truncated) or stdout.
pub fn write_output(output: &Output, content: &[u8]) -> Result<()> {
    match output {
        Output::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content)
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")
        }
        Output::File(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            file.write_all(content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("OK. write result to the {}", path.display());
            Ok(())
        }
    }
}
