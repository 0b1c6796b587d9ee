// src/fsm/io.rs
use std::{
    io::{BufWriter, Write},
    path::Path,
    time::Instant,
};

use serde::{Deserialize, Serialize};

use super::{Automaton, Column, State};

// -------------------- JSON (de)serialization --------------------

#[derive(Serialize, Deserialize)]
struct TableDisk {
    alphabet_len: usize,
    start: State,
    columns: Vec<Column>,
}

impl TableDisk {
    fn new(fsm: &Automaton, start: State) -> Self {
        Self {
            alphabet_len: fsm.alphabet_len(),
            start,
            columns: fsm.columns().to_vec(),
        }
    }

    fn into_automaton(self) -> Result<(Automaton, State), String> {
        let n = self.columns.len();
        if self.alphabet_len == 0 {
            return Err("alphabet_len must be > 0".into());
        }
        for (i, col) in self.columns.iter().enumerate() {
            if col.next.len() != self.alphabet_len {
                return Err(format!(
                    "column {i} has {} entries, expected {}",
                    col.next.len(),
                    self.alphabet_len
                ));
            }
            if let Some((sym, &t)) = col.next.iter().enumerate().find(|&(_, &t)| t as usize >= n) {
                return Err(format!(
                    "column {i} symbol {sym} targets state {t}, table has {n} states"
                ));
            }
        }
        if self.start as usize >= n {
            return Err(format!("start state {} out of range ({n} states)", self.start));
        }
        let mut fsm = Automaton::from_columns(self.alphabet_len, self.columns);
        fsm.reset(self.start);
        Ok((fsm, self.start))
    }
}

pub fn save_table_json(path: &Path, fsm: &Automaton, start: State) -> std::io::Result<()> {
    let instant = Instant::now();
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer(&mut w, &TableDisk::new(fsm, start))?;
    w.flush()?;
    log::info!(
        "saved {} states to {} in {} ms",
        fsm.len(),
        path.display(),
        instant.elapsed().as_millis()
    );
    Ok(())
}

/// Parses a table written by [`save_table_json`], returning it with its
/// start state. Rejects tables whose columns or targets are out of shape.
pub fn load_table_json_bytes(data: &[u8]) -> Result<(Automaton, State), String> {
    serde_json::from_slice::<TableDisk>(data)
        .map_err(|e| format!("Failed to parse table JSON: {e}"))?
        .into_automaton()
}
