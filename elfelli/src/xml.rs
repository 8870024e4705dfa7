//! Scenes stored as `elfelli-xml-1` documents.
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <scene version="elfelli-xml-1">
//!   <point x="100" y="100" charge="4" />
//!   <plate x1="0" y1="0" x2="100" y2="0" charge="-2" />
//! </scene>
//! ```
//!
//! Malformed objects are skipped with a warning, malformed documents are
//! errors.

mod writer;

use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{Error, Result};
use crate::scene::Scene;
use crate::vector::vec2;

pub use writer::write_scene;

/// Value of the `version` attribute on `<scene>`.
pub const VERSION: &str = "elfelli-xml-1";

pub fn load(path: impl AsRef<Path>) -> Result<Scene> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let scene = parse_scene(&text)?;
    log::debug!(
        "loaded {}: {} point charges, {} plates",
        path.display(),
        scene.charges().len(),
        scene.plates().len()
    );
    Ok(scene)
}

pub fn save(path: impl AsRef<Path>, scene: &Scene) -> Result<()> {
    std::fs::write(path, write_scene(scene))?;
    Ok(())
}

pub fn parse_scene(text: &str) -> Result<Scene> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let doc = Document::parse_with_options(text, options).map_err(|e| Error::Xml {
        line: e.pos().row as usize,
        msg: e.to_string(),
    })?;
    let line_of = |node: Node| doc.text_pos_at(node.range().start).row as usize;

    let root = doc.root_element();
    if root.tag_name().name() != "scene" {
        return Err(Error::Xml {
            line: line_of(root),
            msg: format!(
                "expected `scene` element, found `{}`",
                root.tag_name().name()
            ),
        });
    }
    match root.attribute("version") {
        Some(VERSION) => {}
        Some(other) => return Err(Error::Version(other.to_string())),
        None => return Err(Error::Version(String::new())),
    }

    let mut scene = Scene::new();
    // every element below the root, in document order
    for node in root.descendants().skip(1).filter(|n| n.is_element()) {
        let line = line_of(node);
        match node.tag_name().name() {
            "point" => add_point(&mut scene, node, line),
            "plate" => add_plate(&mut scene, node, line),
            name => {
                return Err(Error::Xml {
                    line,
                    msg: format!("unknown element `{}`, expected `point` or `plate`", name),
                })
            }
        }
    }
    Ok(scene)
}

/// Reads the numeric attributes `names` of an element, warning about any
/// other attribute. Returns `None` if one of them is missing or not a number.
fn numbers<const N: usize>(node: Node, names: [&str; N], line: usize) -> Option<[f32; N]> {
    let element = node.tag_name().name();
    let mut values = [None; N];
    for attr in node.attributes() {
        match names.iter().position(|n| *n == attr.name()) {
            Some(i) => match attr.value().trim().parse::<f32>() {
                Ok(v) if v.is_finite() => values[i] = Some(v),
                _ => log::warn!(
                    "line {}: `{}` of `{}` is not a number: `{}`",
                    line,
                    attr.name(),
                    element,
                    attr.value()
                ),
            },
            None => log::warn!(
                "line {}: unexpected attribute `{}` on `{}`",
                line,
                attr.name(),
                element
            ),
        }
    }

    let mut out = [0.0; N];
    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) => out[i] = *v,
            None => {
                log::warn!(
                    "line {}: skipping `{}` without `{}`",
                    line,
                    element,
                    names[i]
                );
                return None;
            }
        }
    }
    Some(out)
}

fn add_point(scene: &mut Scene, node: Node, line: usize) {
    if let Some([x, y, charge]) = numbers(node, ["x", "y", "charge"], line) {
        scene.add_charge(vec2(x, y), charge);
    }
}

fn add_plate(scene: &mut Scene, node: Node, line: usize) {
    let names = ["x1", "y1", "x2", "y2", "charge"];
    if let Some([x1, y1, x2, y2, charge]) = numbers(node, names, line) {
        if let Err(e) = scene.add_plate(vec2(x1, y1), vec2(x2, y2), charge) {
            log::warn!("line {}: skipping plate: {}", line, e);
        }
    }
}
