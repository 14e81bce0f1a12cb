//! Local puzzle inputs

use crate::error::InputError;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Directory of puzzle inputs
///
/// Directory structure: `{dir}/{year}_day{day:02}.txt`
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the input for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("{}_day{:02}.txt", year, day))
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        read_input(self.input_path(year, day))
    }
}

/// Where the executor reads inputs from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// One file per puzzle in a directory
    Store(InputStore),
    /// A single file given on the command line, used for every selected puzzle
    File(PathBuf),
}

impl InputSource {
    /// File the input for a year/day is read from
    pub fn location(&self, year: u16, day: u8) -> PathBuf {
        match self {
            InputSource::Store(store) => store.input_path(year, day),
            InputSource::File(path) => path.clone(),
        }
    }

    pub fn is_available(&self, year: u16, day: u8) -> bool {
        self.location(year, day).is_file()
    }

    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        match self {
            InputSource::Store(store) => store.get(year, day),
            InputSource::File(path) => read_input(path.clone()),
        }
    }
}

fn read_input(path: PathBuf) -> Result<String, InputError> {
    fs::read_to_string(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::Missing(path),
        _ => InputError::Io { path, source },
    })
}
