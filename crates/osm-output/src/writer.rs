//! The five output CSV files.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use osm_model::{OutputTable, ShapedElement};
use serde::Serialize;

use crate::error::{OutputError, Result};
use crate::validate::validate_element;

/// Options for CSV output.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Directory receiving the five files.
    pub output_dir: PathBuf,
    /// Check each element against the schema before writing it.
    pub validate: bool,
}

impl OutputOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            validate: false,
        }
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

/// A finished output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTable {
    pub table: OutputTable,
    pub path: PathBuf,
    /// Data rows, header excluded.
    pub rows: usize,
}

struct TableWriter {
    table: OutputTable,
    path: PathBuf,
    writer: csv::Writer<BufWriter<File>>,
    rows: usize,
}

impl TableWriter {
    fn create(dir: &Path, table: OutputTable) -> Result<Self> {
        let path = dir.join(table.file_name());
        let file = File::create(&path).map_err(|source| OutputError::CreateFile {
            path: path.clone(),
            source,
        })?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(BufWriter::new(file));
        writer
            .write_record(table.fields())
            .map_err(|source| OutputError::Csv {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            table,
            path,
            writer,
            rows: 0,
        })
    }

    fn write<T: Serialize>(&mut self, row: &T) -> Result<()> {
        self.writer
            .serialize(row)
            .map_err(|source| OutputError::Csv {
                path: self.path.clone(),
                source,
            })?;
        self.rows += 1;
        Ok(())
    }

    fn finish(mut self) -> Result<WrittenTable> {
        self.writer.flush().map_err(|source| OutputError::Csv {
            path: self.path.clone(),
            source: source.into(),
        })?;
        Ok(WrittenTable {
            table: self.table,
            path: self.path,
            rows: self.rows,
        })
    }
}

/// Writers for `nodes.csv`, `nodes_tags.csv`, `ways.csv`, `ways_nodes.csv`
/// and `ways_tags.csv`.
///
/// Every file gets its header row on creation, so a run without elements
/// still leaves five valid CSV files behind.
pub struct CsvOutputs {
    validate: bool,
    writers: Vec<TableWriter>,
}

impl CsvOutputs {
    pub fn create(options: &OutputOptions) -> Result<Self> {
        let dir = &options.output_dir;
        fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        let writers = OutputTable::ALL
            .into_iter()
            .map(|table| TableWriter::create(dir, table))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(dir = %dir.display(), validate = options.validate, "Created CSV outputs");
        Ok(Self {
            validate: options.validate,
            writers,
        })
    }

    /// Write all rows of one element.
    pub fn write_element(&mut self, element: &ShapedElement) -> Result<()> {
        if self.validate {
            validate_element(element)?;
        }
        match element {
            ShapedElement::Node { node, tags } => {
                self.writer(OutputTable::Nodes).write(node)?;
                let tag_writer = self.writer(OutputTable::NodeTags);
                for tag in tags {
                    tag_writer.write(tag)?;
                }
            }
            ShapedElement::Way {
                way,
                way_nodes,
                tags,
            } => {
                self.writer(OutputTable::Ways).write(way)?;
                let node_writer = self.writer(OutputTable::WayNodes);
                for way_node in way_nodes {
                    node_writer.write(way_node)?;
                }
                let tag_writer = self.writer(OutputTable::WayTags);
                for tag in tags {
                    tag_writer.write(tag)?;
                }
            }
        }
        Ok(())
    }

    /// Rows written so far to one file.
    pub fn rows(&self, table: OutputTable) -> usize {
        self.writers[table as usize].rows
    }

    /// Flush every file.
    pub fn finish(self) -> Result<Vec<WrittenTable>> {
        self.writers.into_iter().map(TableWriter::finish).collect()
    }

    // Writers are created in `OutputTable::ALL` order.
    fn writer(&mut self, table: OutputTable) -> &mut TableWriter {
        &mut self.writers[table as usize]
    }
}
