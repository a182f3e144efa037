use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::lattice::Lattice;

/// One occupancy checkpoint, serialized as a single JSONL record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub iteration: u64,
    pub occupancy: Vec<u32>,
}

/// Write the lattice occupancy to `<output_dir>/iter_<n>.jsonl`.
///
/// Creates the output directory if it does not exist. One JSON object per
/// line, matching the `Snapshot` record layout.
pub fn flush_snapshot(lattice: &Lattice, iteration: u64, output_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("iter_{iteration:06}.jsonl"));
    let snapshot = Snapshot {
        iteration,
        occupancy: lattice.occupancy().to_vec(),
    };
    let mut writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer(&mut writer, &snapshot)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    tracing::debug!(path = %path.display(), iteration, "wrote snapshot checkpoint");
    Ok(())
}
