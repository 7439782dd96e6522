//! Driver behind the `jlex` binary.
//!
//! Reads one source file, runs a scan session and renders one line per
//! token. `main.rs` only parses arguments and sets up logging.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use jlex::{LexError, Token, TokenStream};
use thiserror::Error;

/// Output switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print kind names (`LESS_EQUAL`) instead of integer codes.
    pub names: bool,
    /// Append a count line after the tokens.
    pub summary: bool,
}

/// Everything that makes the driver exit with status 1.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Read and lex `path`, returning the rendered output.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD before lexing.
/// They end up as `Error` tokens, or vanish inside a comment.
///
/// Nothing is rendered when the scan fails: a fatal lexer error discards the
/// tokens scanned so far.
#[tracing::instrument(level = "debug", skip(options))]
pub fn lex_file(path: &Path, options: RenderOptions) -> Result<String, DriverError> {
    let bytes = std::fs::read(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = source {
        tracing::warn!(
            path = %path.display(),
            "source is not valid UTF-8; invalid bytes replaced"
        );
    }
    let tokens = jlex::lex(&source)?;
    Ok(render(&tokens, options))
}

/// Render a token stream, one line per token, each ending in `\n`.
pub fn render(tokens: &TokenStream, options: RenderOptions) -> String {
    let mut out = String::new();
    for token in tokens {
        if options.names {
            out.push_str(&named_line(token));
        } else {
            out.push_str(&token.to_string());
        }
        out.push('\n');
    }
    if options.summary {
        let lines = tokens.last().map_or(1, Token::line);
        out.push_str(&format!(
            "{} tokens, {} errors, {lines} lines\n",
            tokens.len(),
            tokens.error_count(),
        ));
    }
    out
}

fn named_line(token: &Token) -> String {
    format!(
        "Token: {}, Line: {}, Column: {}, Lexeme: {}",
        token.kind().name(),
        token.line(),
        token.column(),
        token.text()
    )
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
