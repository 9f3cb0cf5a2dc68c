use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::{SaveLoadError, SimulationConfig, State};

/// Snapshot of a finished run: parameters plus states before and after.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DataFile {
    pub config: SimulationConfig,
    pub seed: Option<u64>,
    pub initial: State,
    pub final_state: State,
}

impl DataFile {
    pub fn new(config: &SimulationConfig, seed: Option<u64>, initial: &State, final_state: &State) -> Self {
        DataFile {
            config: config.clone(),
            seed,
            initial: initial.clone(),
            final_state: final_state.clone(),
        }
    }

    pub fn save_to_file(&self, path: &Path, pretty_print: bool) -> Result<(), SaveLoadError> {
        let file = File::create(path).map_err(SaveLoadError::CantCreate)?;
        let mut buf_writer = BufWriter::new(file);
        let res = if pretty_print {
            serde_json::to_writer_pretty(&mut buf_writer, self)
        } else {
            serde_json::to_writer(&mut buf_writer, self)
        };
        res.map_err(SaveLoadError::CantWrite)?;
        buf_writer.flush().map_err(SaveLoadError::CantFlush)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SaveLoadError> {
        let file = File::open(path).map_err(SaveLoadError::CantOpen)?;
        let buf_reader = BufReader::new(file);
        serde_json::from_reader(buf_reader).map_err(SaveLoadError::CantRead)
    }
}
