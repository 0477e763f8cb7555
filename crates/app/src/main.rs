//! Command-line front end: parse an OBJ file and print what was decoded.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use asset::{CsTypeValidation, ParseOptions};
use corelib::{BasisMatrix, Scene, VertexKind};

fn parse_cstype_arg() -> CsTypeValidation {
    // Accept: --cstype=strict|lenient
    let mut validation = CsTypeValidation::default();
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--cstype=") {
            validation = match val.to_ascii_lowercase().as_str() {
                "strict" => CsTypeValidation::Strict,
                "lenient" | "permissive" => CsTypeValidation::Lenient,
                other => {
                    eprintln!("[warn] Unknown cstype mode '{}', falling back to strict.", other);
                    CsTypeValidation::Strict
                }
            };
        }
    }
    validation
}

fn parse_verbose_arg() -> bool {
    std::env::args().any(|arg| arg == "--verbose" || arg == "-v")
}

fn parse_path_arg() -> Option<PathBuf> {
    std::env::args().skip(1).find(|arg| !arg.starts_with('-')).map(PathBuf::from)
}

fn write_matrix(f: &mut fmt::Formatter<'_>, label: &str, matrix: &BasisMatrix) -> fmt::Result {
    writeln!(f, "  {label}: {}x{}", matrix.rows(), matrix.cols())?;
    for row in matrix.row_slices() {
        let cells: Vec<String> = row.iter().map(|c| format!("{c:>8.3}")).collect();
        writeln!(f, "    [{}]", cells.join(" "))?;
    }
    Ok(())
}

/// Human-readable report of a parsed scene.
struct Summary<'a>(&'a Scene);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scene = self.0;
        let vertices = &scene.shape.vertices;
        writeln!(f, "vertices:")?;
        for kind in VertexKind::ALL {
            writeln!(f, "  {:<2} {}", kind.keyword(), vertices.list(kind).len())?;
        }

        let attrs = &scene.shape.attributes;
        if !attrs.is_empty() {
            writeln!(f, "curve/surface:")?;
            if let Some(t) = &attrs.cs_type {
                writeln!(f, "  cstype: {t}")?;
            }
            if let Some(d) = attrs.degree {
                writeln!(f, "  deg: {} {}", d.u, d.v)?;
            }
            if let Some(m) = &attrs.bmat_u {
                write_matrix(f, "bmat u", m)?;
            }
            if let Some(m) = &attrs.bmat_v {
                write_matrix(f, "bmat v", m)?;
            }
            if let Some(s) = attrs.step {
                writeln!(f, "  step: {} {}", s.u, s.v)?;
            }
        }

        if !scene.ignored.is_empty() {
            writeln!(f, "ignored statements: {}", scene.ignored_count())?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let default_level = if parse_verbose_arg() { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let Some(path) = parse_path_arg() else {
        bail!("Usage: app <file.obj> [--cstype=strict|lenient] [--verbose]");
    };
    let options = ParseOptions::default().with_cstype_validation(parse_cstype_arg());
    log::debug!("Parse options: {:?}", options);

    let scene = asset::load_obj_from_path_with_options(&path, options)
        .with_context(|| format!("Failed to parse OBJ file: {}", path.display()))?;

    for (keyword, count) in &scene.ignored {
        log::debug!("Ignored {} '{}' statement(s)", count, keyword);
    }

    print!("{}", Summary(&scene));
    Ok(())
}
