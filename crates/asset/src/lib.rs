//! Asset loading/parsers.
//! OBJ loader producing vertex data and curve/surface attributes.

pub mod obj;

pub use obj::{
    CsTypeValidation, ObjParser, ParseOptions, load_obj_from_path, load_obj_from_path_with_options,
    load_obj_from_reader, load_obj_from_str,
};
