//! JSON file and string helpers returning [`Either`]

use crate::atomic_file::write_atomic;
use physocts_core::{capture, Either, Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{error, info as log_info};

const PRETTY_INDENT: &[u8] = b"    ";

/// Read and parse a JSON file
pub fn load(path: impl AsRef<Path>) -> Either<Value> {
    load_typed(path)
}

/// Read a JSON file straight into `T`
pub fn load_typed<T: DeserializeOwned>(path: impl AsRef<Path>) -> Either<T> {
    let path = path.as_ref();
    capture(|| read_json(path))
}

/// Serialise `data` compactly and atomically replace `path` with it
pub fn write(data: &Value, path: impl AsRef<Path>) -> Either<()> {
    let path = path.as_ref();
    capture(|| -> Result<()> {
        let bytes = serde_json::to_vec(data)?;
        write_atomic(path, &bytes)
    })
}

/// Single-line JSON text
pub fn flat<T: Serialize + ?Sized>(data: &T) -> Either<String> {
    capture(|| serde_json::to_string(data))
}

/// Multi-line JSON text indented by four spaces
pub fn pretty<T: Serialize + ?Sized>(data: &T) -> Either<String> {
    capture(|| -> Result<String> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(PRETTY_INDENT));
        data.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    })
}

/// Log the pretty form of `data` at info level
pub fn info<T: Serialize + ?Sized>(data: &T) {
    match pretty(data) {
        Either::Right(text) => log_info!("JSON=\n{text}"),
        Either::Left(failure) => error!("Failed to dump to JSON string: {failure}"),
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| Error::file_system(path, "read JSON file", e))?;
    Ok(serde_json::from_str(&text)?)
}
