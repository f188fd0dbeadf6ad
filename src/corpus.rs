use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    inverted_index::doc_map::DocId,
};

/// Ordered document texts. Document `n` (1-based) is `texts()[n - 1]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<String>,
}

impl Corpus {
    pub const fn new(documents: Vec<String>) -> Self {
        Self { documents }
    }

    /// Loads a corpus from a JSON file or from every `.json` file under a
    /// directory, taken in file name order.
    ///
    /// A file holds either an array of records or a single record; the
    /// document text is the string stored under `text_field`.
    pub fn from_path(path: &Path, text_field: &str) -> Result<Self> {
        let files = if path.is_dir() {
            json_files(path)?
        } else {
            vec![path.to_path_buf()]
        };

        let mut documents = Vec::new();
        for file in &files {
            let value: Value = serde_json::from_reader(BufReader::new(File::open(file)?))?;
            let records = match value {
                Value::Array(records) => records,
                record => vec![record],
            };

            for record in records {
                let index = documents.len();
                let text = record
                    .get(text_field)
                    .and_then(Value::as_str)
                    .ok_or_else(|| Error::MissingTextField {
                        index,
                        field: text_field.to_string(),
                    })?;

                documents.push(text.to_string());
            }

            debug!(file = %file.display(), documents = documents.len(), "Corpus file loaded");
        }

        info!(path = %path.display(), files = files.len(), documents = documents.len(), "Corpus loaded");

        Ok(Self { documents })
    }

    pub fn texts(&self) -> &[String] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Full text of the document with the given 1-based identifier.
    pub fn document(&self, doc_id: DocId) -> Result<&str> {
        doc_id
            .checked_sub(1)
            .and_then(|position| self.documents.get(position))
            .map(String::as_str)
            .ok_or(Error::DocumentNotFound(doc_id))
    }
}

fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let is_json = entry.path().extension().is_some_and(|ext| ext == "json");

        if entry.file_type().is_file() && is_json {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
