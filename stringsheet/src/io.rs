//! Reading and writing whole documents.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use crate::error::Error;

/// Reads a document into memory.
///
/// A byte order mark selects the encoding (Apple `.strings` files are often
/// UTF-16); without one the content is read as UTF-8.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    let path = path.as_ref();
    let missing = |source| Error::MissingInput {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(missing)?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .strip_bom(true)
        .build(file);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded).map_err(missing)?;
    Ok(decoded)
}

/// Writes a document as newline-terminated lines, one per output line.
///
/// Blank lines are kept, including trailing ones.
pub fn write_document<P: AsRef<Path>, S: AsRef<str>>(path: P, lines: &[S]) -> Result<(), Error> {
    let path = path.as_ref();
    let failed = |source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(failed)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes()).map_err(failed)?;
        writer.write_all(b"\n").map_err(failed)?;
    }
    writer.flush().map_err(failed)
}
