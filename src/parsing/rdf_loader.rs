//! Loading RDF files into a [`Dataset`].
//!
//! The format is chosen by file extension (`.nt`, `.nq`, `.ttl`, `.trig`,
//! `.rdf`, ...). Named graphs are merged into the one default graph.

use crate::core::{Dataset, Term, Triple};
use crate::error::{Error, Result};
use oxigraph::io::{RdfFormat, RdfParser};
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Parse `reader` and insert its triples, returning how many were new
pub fn load_reader(reader: impl Read, format: RdfFormat, dataset: &mut Dataset) -> Result<usize> {
    let mut inserted = 0;
    for quad in RdfParser::from_format(format).for_reader(reader) {
        let quad = quad?;
        let subject: oxigraph::model::Term = quad.subject.into();
        let subject = Term::from_oxigraph(&subject).and_then(|term| term.as_identifier());
        let object = Term::from_oxigraph(&quad.object);
        let (Some(subject), Some(object)) = (subject, object) else {
            log::debug!("Skipping statement with an embedded triple");
            continue;
        };
        if dataset.insert(Triple::new(subject, quad.predicate.as_str(), object))? {
            inserted += 1;
        }
    }
    Ok(inserted)
}

pub fn load_str(data: &str, format: RdfFormat, dataset: &mut Dataset) -> Result<usize> {
    load_reader(data.as_bytes(), format, dataset)
}

/// Load one file; files with an unknown extension are skipped
pub fn load_file(path: &Path, dataset: &mut Dataset) -> Result<usize> {
    let Some(format) = path.extension().and_then(|e| e.to_str()).and_then(RdfFormat::from_extension) else {
        log::warn!("Skipping {}: unsupported RDF file extension", path.display());
        return Ok(0);
    };
    let file = File::open(path)?;
    let inserted = load_reader(BufReader::new(file), format, dataset)
        .map_err(|e| Error::Parse(format!("{}: {}", path.display(), e)))?;
    log::info!("Loaded {} triples from {}", inserted, path.display());
    Ok(inserted)
}

/// Load a file, or every file below a directory in name order
pub fn load_path(path: &Path, dataset: &mut Dataset) -> Result<usize> {
    if !path.is_dir() {
        return load_file(path, dataset);
    }
    let mut entries: Vec<PathBuf> = fs::read_dir(path)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<_>>()?;
    entries.sort();

    let mut inserted = 0;
    for entry in entries {
        inserted += load_path(&entry, dataset)?;
    }
    Ok(inserted)
}

pub fn load_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Dataset> {
    let mut dataset = Dataset::new();
    for path in paths {
        load_path(path.as_ref(), &mut dataset)?;
    }
    log::info!("Dataset holds {} triples", dataset.len());
    Ok(dataset)
}
