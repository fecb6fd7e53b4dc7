//! Subcommand handlers. Output goes to the supplied writer; diagnostics go to `tracing`.

use anyhow::{Context, Result};
use central_kernel::codec::Codec;
use central_kernel::domain::config::CodecConfig;
use central_kernel::domain::organization::{Rank, RankInput};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{info, warn};

const STDIN_MARKER: &str = "-";

pub(crate) fn read_document(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_MARKER {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw).context("Failed to read standard input")?;
        return Ok(raw);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn decode(raw: &str, origin: &Path) -> Result<Vec<Rank>> {
    let ranks = Codec::default()
        .decode_document::<Rank>(raw)
        .with_context(|| format!("{} is not a valid rank document", origin.display()))?;
    info!(count = ranks.len(), source = %origin.display(), "Document decoded");
    Ok(ranks)
}

fn display(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Lists every rank on one line and reports stale embeds beneath it.
pub(crate) fn check(raw: &str, origin: &Path, config: &CodecConfig, out: &mut impl Write) -> Result<()> {
    let ranks = decode(raw, origin)?;
    let mut stale_total = 0;

    for (index, rank) in ranks.iter().enumerate() {
        writeln!(
            out,
            "#{index}\tid={}\tcode={}\tname={}\tunit={}\torder={}\tcreated={}",
            display(rank.id.as_deref()),
            display(rank.code.as_deref()),
            display(rank.name.as_deref()),
            display(rank.unit_ref()),
            rank.order.map_or_else(|| "-".to_owned(), |o| o.to_string()),
            rank.create_date.map_or_else(|| "-".to_owned(), |ts| ts.to_string()),
        )?;

        if config.report_stale_embeds {
            for mismatch in rank.stale_embeds() {
                warn!(index, %mismatch, "Stale embedded record");
                writeln!(out, "  stale: {mismatch}")?;
                stale_total += 1;
            }
        }
    }

    writeln!(out, "{} rank(s), {stale_total} stale embed(s)", ranks.len())?;
    Ok(())
}

/// Writes the document back in canonical form.
pub(crate) fn normalize(raw: &str, origin: &Path, codec: Codec, out: &mut impl Write) -> Result<()> {
    let ranks = decode(raw, origin)?;
    writeln!(out, "{}", codec.encode(&ranks)?)?;
    Ok(())
}

/// Writes the insert/update payload of every rank.
pub(crate) fn input(raw: &str, origin: &Path, codec: Codec, out: &mut impl Write) -> Result<()> {
    let inputs: Vec<RankInput> = decode(raw, origin)?.into_iter().map(RankInput::from).collect();
    writeln!(out, "{}", codec.encode(&inputs)?)?;
    Ok(())
}
