//! Streaming OSM XML reader.
//!
//! Yields one [`OsmElement`] per top-level `node` or `way`. Children other
//! than `tag` and `nd` are ignored, as is everything inside `relation`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use osm_model::{ElementKind, OsmElement, RawTag};
use quick_xml::Reader;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};

use crate::error::{IngestError, Result};

/// Pull-based reader over an OSM XML document.
pub struct OsmReader<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    current: Option<OsmElement>,
    done: bool,
}

impl OsmReader<BufReader<File>> {
    /// Open an OSM file for streaming.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        tracing::debug!(path = %path.display(), "Opened OSM file");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> OsmReader<R> {
    pub fn new(inner: R) -> Self {
        let mut reader = Reader::from_reader(inner);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
            current: None,
            done: false,
        }
    }

    /// Byte offset of the reader in the document.
    pub fn position(&self) -> u64 {
        self.reader.buffer_position()
    }

    fn next_element(&mut self) -> Result<Option<OsmElement>> {
        let decoder = self.reader.decoder();
        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|source| IngestError::Xml {
                    position: self.reader.error_position(),
                    source,
                })?;
            let position = self.reader.buffer_position();
            let xml_error = |source: quick_xml::Error| IngestError::Xml { position, source };

            match event {
                Event::Start(start) => {
                    if let Some(kind) = ElementKind::from_tag_name(start.name().as_ref()) {
                        self.current = Some(open_element(kind, &start, decoder).map_err(xml_error)?);
                    } else if let Some(element) = self.current.as_mut() {
                        add_child(element, &start, decoder, position)?;
                    }
                }
                Event::Empty(start) => {
                    if let Some(kind) = ElementKind::from_tag_name(start.name().as_ref()) {
                        return open_element(kind, &start, decoder)
                            .map(Some)
                            .map_err(xml_error);
                    }
                    if let Some(element) = self.current.as_mut() {
                        add_child(element, &start, decoder, position)?;
                    }
                }
                Event::End(end) => {
                    if ElementKind::from_tag_name(end.name().as_ref()).is_some()
                        && let Some(element) = self.current.take()
                    {
                        return Ok(Some(element));
                    }
                }
                Event::Eof => {
                    return match self.current.take() {
                        Some(element) => Err(IngestError::UnexpectedEof {
                            element: element.kind.to_string(),
                            id: element.id().to_string(),
                        }),
                        None => Ok(None),
                    };
                }
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for OsmReader<R> {
    type Item = Result<OsmElement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let next = self.next_element();
        if !matches!(next, Ok(Some(_))) {
            self.done = true;
        }
        next.transpose()
    }
}

fn open_element(
    kind: ElementKind,
    start: &BytesStart<'_>,
    decoder: Decoder,
) -> std::result::Result<OsmElement, quick_xml::Error> {
    let mut element = OsmElement::new(kind);
    element.attributes = attributes(start, decoder)?;
    Ok(element)
}

fn add_child(
    element: &mut OsmElement,
    start: &BytesStart<'_>,
    decoder: Decoder,
    position: u64,
) -> Result<()> {
    let child = match start.name().as_ref() {
        b"tag" => "tag",
        b"nd" => "nd",
        _ => return Ok(()),
    };
    let attrs =
        attributes(start, decoder).map_err(|source| IngestError::Xml { position, source })?;
    let take = |name: &str| {
        attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| IngestError::MissingAttribute {
                element: child.to_string(),
                id: element.id().to_string(),
                attribute: name.to_string(),
            })
    };

    if child == "tag" {
        let tag = RawTag::new(take("k")?, take("v")?);
        element.tags.push(tag);
    } else {
        let node_ref = take("ref")?;
        element.node_refs.push(node_ref);
    }
    Ok(())
}

fn attributes(
    start: &BytesStart<'_>,
    decoder: Decoder,
) -> std::result::Result<Vec<(String, String)>, quick_xml::Error> {
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.decode_and_unescape_value(decoder)?.into_owned();
        attrs.push((key, value));
    }
    Ok(attrs)
}
