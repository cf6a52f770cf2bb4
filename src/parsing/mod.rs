//! Reading graph data from RDF serializations.

pub mod rdf_loader;

pub use rdf_loader::{load_file, load_path, load_paths, load_str};
