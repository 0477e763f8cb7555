//! OBJ parser for vertex data and free-form curve/surface attributes.
//!
//! Lines are classified by keyword, decoded into records and collected into a
//! [`Scene`]. The first decode failure aborts the parse; statements outside the
//! keyword table (faces, groups, materials, ...) are skipped and counted.

mod attributes;
mod classify;
mod fields;
mod options;
mod vertex;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use corelib::{DecodeError, ObjError, ObjResult, Scene};

pub use attributes::decode_attribute;
pub use classify::{CsStatement, Line, RecordKind, classify};
pub use options::{CsTypeValidation, ParseOptions};
pub use vertex::decode_vertex;

/// Load an OBJ scene from a file path.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> ObjResult<Scene> {
    load_obj_from_path_with_options(path, ParseOptions::default())
}

pub fn load_obj_from_path_with_options(
    path: impl AsRef<Path>,
    options: ParseOptions,
) -> ObjResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading OBJ from {:?}", path);

    let file = File::open(path).map_err(|source| {
        log::warn!("Failed to open OBJ file {:?}: {}", path, source);
        ObjError::open(path, source)
    })?;
    let scene = load_obj_from_reader_with_options(BufReader::new(file), options)?;

    let vertices = &scene.shape.vertices;
    log::info!(
        "Loaded OBJ: {} geometric, {} normal, {} parameter, {} texture vertices ({} statements ignored)",
        vertices.geometric.len(),
        vertices.normals.len(),
        vertices.parameters.len(),
        vertices.textures.len(),
        scene.ignored_count()
    );
    Ok(scene)
}

/// Load an OBJ scene from a [`BufRead`] implementation.
pub fn load_obj_from_reader<R: BufRead>(reader: R) -> ObjResult<Scene> {
    load_obj_from_reader_with_options(reader, ParseOptions::default())
}

pub fn load_obj_from_reader_with_options<R: BufRead>(
    reader: R,
    options: ParseOptions,
) -> ObjResult<Scene> {
    parse_lines(reader.lines(), options)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str) -> ObjResult<Scene> {
    load_obj_from_str_with_options(contents, ParseOptions::default())
}

pub fn load_obj_from_str_with_options(contents: &str, options: ParseOptions) -> ObjResult<Scene> {
    load_obj_from_reader_with_options(io::Cursor::new(contents), options)
}

/// Parse a sequence of lines, stopping at the first read or decode error.
pub fn parse_lines<I, S>(lines: I, options: ParseOptions) -> ObjResult<Scene>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut parser = ObjParser::new(options);
    for line in lines {
        parser.feed_line(line?.as_ref())?;
    }
    parser.finish()
}

/// Scene accumulator for one parse: feed it lines in order, then take the scene.
///
/// The first decode failure poisons the parser. Every later `feed_line` returns
/// that same failure without decoding, and `finish` yields no scene.
#[derive(Debug, Default)]
pub struct ObjParser {
    options: ParseOptions,
    scene: Scene,
    line_no: usize,
    failure: Option<(usize, String, DecodeError)>,
}

impl ObjParser {
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            scene: Scene::new(),
            line_no: 0,
            failure: None,
        }
    }

    /// Number of lines fed so far.
    pub fn lines_read(&self) -> usize {
        self.line_no
    }

    pub fn is_poisoned(&self) -> bool {
        self.failure.is_some()
    }

    fn failure_error(&self) -> Option<ObjError> {
        self.failure
            .as_ref()
            .map(|(line, text, source)| ObjError::decode(*line, text.clone(), source.clone()))
    }

    /// Decode one raw line into the scene.
    pub fn feed_line(&mut self, raw: &str) -> ObjResult<()> {
        if let Some(err) = self.failure_error() {
            return Err(err);
        }
        self.line_no += 1;
        let line = raw.trim();

        let decoded = match classify(line) {
            Line::Skip => Ok(()),
            Line::Unrecognized(keyword) => {
                self.scene.record_ignored(keyword);
                Ok(())
            }
            Line::Record(RecordKind::Vertex(kind), rest) => {
                decode_vertex(kind, rest).map(|v| self.scene.push_vertex(v))
            }
            Line::Record(RecordKind::Attribute(statement), rest) => {
                let degree = self.scene.shape.attributes.degree;
                decode_attribute(statement, rest, self.options.cstype, degree)
                    .map(|record| self.scene.apply_attribute(record))
            }
        };

        decoded.map_err(|source| {
            let err = ObjError::decode(self.line_no, raw, source.clone());
            self.failure = Some((self.line_no, raw.to_owned(), source));
            err
        })
    }

    /// Take the assembled scene, or the failure that aborted the parse.
    pub fn finish(self) -> ObjResult<Scene> {
        match self.failure_error() {
            Some(err) => Err(err),
            None => Ok(self.scene),
        }
    }
}
