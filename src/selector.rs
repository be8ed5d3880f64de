//! Interactive song selection.
//!
//! Defines the [`SongSelector`] capability ("select one of N hits, or none")
//! with two backends: [`FzfSelector`], which pipes formatted candidate lines
//! to an external `fzf` subprocess, and [`FirstSelector`], which
//! deterministically picks the first hit for non-interactive use (`--first`).
//!
//! The fzf protocol is line-based: each candidate is sent as
//! `<index>\t<title> - <artist>` on stdin, fzf shows only the text after the
//! tab, and the chosen line comes back on stdout. The subprocess inherits
//! stderr so its terminal UI renders; a non-zero exit or a blank selection
//! means the user cancelled, which is distinct from an error.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::types::SearchHit;

/// Capability to pick one search hit out of an ordered list.
///
/// Implementations return `Ok(None)` for "no selection" (user cancelled),
/// and a user-facing error string for failures such as a missing tool.
pub trait SongSelector {
    fn select<'a>(&self, hits: &'a [SearchHit]) -> Result<Option<&'a SearchHit>, String>;
}

/// Non-interactive backend: always picks the first hit.
pub struct FirstSelector;

impl SongSelector for FirstSelector {
    fn select<'a>(&self, hits: &'a [SearchHit]) -> Result<Option<&'a SearchHit>, String> {
        Ok(hits.first())
    }
}

/// Interactive backend driving an external `fzf` subprocess.
pub struct FzfSelector;

impl SongSelector for FzfSelector {
    fn select<'a>(&self, hits: &'a [SearchHit]) -> Result<Option<&'a SearchHit>, String> {
        let input = hits
            .iter()
            .enumerate()
            .map(|(i, hit)| format_choice(i, hit))
            .collect::<Vec<_>>()
            .join("\n");

        // stderr stays connected to the terminal so the fzf UI can render;
        // stdin/stdout are captured for the data exchange.
        let mut child = match Command::new("fzf")
            .args([
                "--with-nth=2..",
                "--delimiter=\t",
                "--height=~15",
                "--layout=reverse",
                "--border",
                "--prompt=Select song: ",
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
        {
            Ok(child) => child,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err("fzf not found. Please install fzf or use the --first flag.".to_string());
            }
            Err(err) => return Err(format!("Failed to start fzf: {}", err)),
        };

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = stdin.write_all(input.as_bytes()) {
                return Err(format!("Failed to write candidates to fzf: {}", err));
            }
            // stdin drops here, closing the pipe so fzf sees end of input
        }

        let output = child
            .wait_with_output()
            .map_err(|err| format!("Failed to read fzf output: {}", err))?;

        if !output.status.success() {
            // User cancelled (Esc / Ctrl-C)
            return Ok(None);
        }

        let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if selected.is_empty() {
            return Ok(None);
        }

        let index = parse_selection(&selected)?;
        match hits.get(index) {
            Some(hit) => Ok(Some(hit)),
            None => Err(format!("Selection index {} out of range", index)),
        }
    }
}

/// Formats one candidate line for fzf: `<index>\t<title> - <artist>`.
pub fn format_choice(index: usize, hit: &SearchHit) -> String {
    format!("{}\t{} - {}", index, hit.title, hit.artist)
}

/// Parses the leading tab-delimited index out of a selected fzf line.
pub fn parse_selection(line: &str) -> Result<usize, String> {
    line.split('\t')
        .next()
        .unwrap_or_default()
        .parse::<usize>()
        .map_err(|_| format!("Unexpected fzf selection: {:?}", line))
}
