//! Game payloads: block lists, command history and parser coverage.

use std::io::Read;

use shrdlurn_core::{Block, CoverageSpan, HistoryEntry};

use crate::error::LoadError;

pub fn read_blocks<R: Read>(reader: R) -> Result<Vec<Block>, LoadError> {
    let blocks: Vec<Block> = serde_json::from_reader(reader)?;
    log::debug!("read {} blocks", blocks.len());
    Ok(blocks)
}

pub fn read_history<R: Read>(reader: R) -> Result<Vec<HistoryEntry>, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Decodes a coverage list, `[["$Action", "add"], ["$Color", "red"]]`, reporting which
/// span was malformed.
pub fn read_coverage<R: Read>(reader: R) -> Result<Vec<CoverageSpan>, LoadError> {
    let raw: Vec<Vec<String>> = serde_json::from_reader(reader)?;
    raw.into_iter()
        .enumerate()
        .map(|(index, span)| {
            CoverageSpan::try_from(span)
                .map_err(|message| LoadError::InvalidCoverage { index, message })
        })
        .collect()
}
