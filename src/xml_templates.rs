/*
 * The $1 Unistroke Recognizer (rust version)
 *
 * Original authors:
 *
 *	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    wobbrock@uw.edu
 *
 *	    Andrew D. Wilson, Ph.D.
 *	    Microsoft Research
 *	    One Microsoft Way
 *	    Redmond, WA 98052
 *	    awilson@microsoft.com
 *
 *	    Yang Li, Ph.D.
 *	    Department of Computer Science and Engineering
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    yangli@cs.washington.edu
 *
 * The academic publication for the $1 recognizer, and what should be
 * used to cite it, is:
 *
 *	Wobbrock, J.O., Wilson, A.D. and Li, Y. (2007). Gestures without
 *	  libraries, toolkits or training: A $1 recognizer for user interface
 *	  prototypes. Proceedings of the ACM Symposium on User Interface
 *	  Software and Technology (UIST '07). Newport, Rhode Island (October
 *	  7-10, 2007). New York: ACM Press, pp. 159-168.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (C) 2007-2012, Jacob O. Wobbrock, Andrew D. Wilson and Yang Li.
 * All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University of Washington nor Microsoft,
 *      nor the names of its contributors may be used to endorse or promote
 *      products derived from this software without specific prior written
 *      permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Jacob O. Wobbrock OR Andrew D. Wilson
 * OR Yang Li OR Ferran Pujol Camins BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
 * EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT
 * OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
 * INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
 * STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

use crate::{
    error::{RecognizerError, Result},
    gesture::Stroke,
    point::Point,
    template::{RawTemplate, TemplateRepository},
};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Length of the variant suffix at the end of a template file stem
const VARIANT_SUFFIX_LEN: usize = 2;

/// Loads every `*.xml` file below a root directory, in sorted path order.
///
/// Each file holds one gesture as a sequence of `<Point X=".." Y=".."/>`
/// elements. The label is the file stem without its two-character variant
/// suffix, so `circle01.xml` and `circle02.xml` are both exemplars of `circle`.
#[derive(Debug, Clone)]
pub struct XmlTemplateDirectory {
    root: PathBuf,
}

impl XmlTemplateDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        XmlTemplateDirectory { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateRepository for XmlTemplateDirectory {
    fn load_templates(&self) -> Result<Vec<RawTemplate>> {
        let mut files = Vec::new();
        collect_xml_files(&self.root, &mut files)?;
        files.sort();

        let mut templates = Vec::with_capacity(files.len());
        for path in files {
            let text = fs::read_to_string(&path).map_err(|source| RecognizerError::Io {
                path: path.clone(),
                source,
            })?;
            let stroke = parse_gesture_xml(&text, &path)?;
            let label = label_from_path(&path);
            tracing::debug!(%label, points = stroke.len(), path = %path.display(), "loaded template");
            templates.push(RawTemplate { label, stroke });
        }
        Ok(templates)
    }
}

fn collect_xml_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let io_error = |source| RecognizerError::Io {
        path: dir.to_path_buf(),
        source,
    };
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_dir() {
            collect_xml_files(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "xml") {
            files.push(path);
        }
    }
    Ok(())
}

/// `circle01.xml` -> `circle`
fn label_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let chars = stem.chars().count();
    if chars <= VARIANT_SUFFIX_LEN {
        return stem;
    }
    stem.chars().take(chars - VARIANT_SUFFIX_LEN).collect()
}

/// Parses the `<Point X=".." Y=".."/>` elements of a gesture document, in document order.
/// `path` is only used for error reporting.
pub fn parse_gesture_xml(text: &str, path: &Path) -> Result<Stroke> {
    let doc = roxmltree::Document::parse(text).map_err(|source| RecognizerError::Xml {
        path: path.to_path_buf(),
        source,
    })?;
    doc.descendants()
        .filter(|n| n.has_tag_name("Point"))
        .map(|n| {
            let x = coordinate(n.attribute("X"), path)?;
            let y = coordinate(n.attribute("Y"), path)?;
            Ok(Point::new(x, y))
        })
        .collect::<Result<Vec<_>>>()
        .map(Stroke::new)
}

fn coordinate(value: Option<&str>, path: &Path) -> Result<f64> {
    let invalid = || RecognizerError::InvalidCoordinate {
        path: path.to_path_buf(),
        value: value.unwrap_or_default().to_string(),
    };
    let v: f64 = value.ok_or_else(invalid)?.trim().parse().map_err(|_| invalid())?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARET: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>
<Gesture Name="caret01" Subject="1" Speed="medium" NumPts="3">
  <Point X="0" Y="0" T="100" />
  <Point X="5.5" Y="10" T="120" />
  <Point X="10" Y="-0.25" T="140" />
</Gesture>"#;

    #[test]
    fn parses_points_in_document_order() {
        let stroke = parse_gesture_xml(CARET, Path::new("caret01.xml")).unwrap();
        assert_eq!(
            stroke.points,
            [Point::new(0.0, 0.0), Point::new(5.5, 10.0), Point::new(10.0, -0.25)]
        );
    }

    #[test]
    fn rejects_bad_coordinates() {
        let missing = r#"<Gesture><Point X="1" /></Gesture>"#;
        let garbage = r#"<Gesture><Point X="1" Y="up" /></Gesture>"#;
        for text in [missing, garbage] {
            assert!(matches!(
                parse_gesture_xml(text, Path::new("bad.xml")),
                Err(RecognizerError::InvalidCoordinate { .. })
            ));
        }
        assert!(matches!(
            parse_gesture_xml("<Gesture>", Path::new("bad.xml")),
            Err(RecognizerError::Xml { .. })
        ));
    }

    #[test]
    fn labels_drop_the_variant_suffix() {
        assert_eq!(label_from_path(Path::new("t/circle01.xml")), "circle");
        assert_eq!(label_from_path(Path::new("left_sq_bracket03.xml")), "left_sq_bracket");
        assert_eq!(label_from_path(Path::new("v1.xml")), "v1");
    }

    #[test]
    fn loads_a_directory_tree_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("set_b");
        fs::create_dir(&nested).unwrap();
        fs::write(dir.path().join("caret02.xml"), CARET).unwrap();
        fs::write(dir.path().join("caret01.xml"), CARET).unwrap();
        fs::write(nested.join("zig01.xml"), CARET).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let templates = XmlTemplateDirectory::new(dir.path()).load_templates().unwrap();
        let labels: Vec<&str> = templates.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["caret", "caret", "zig"]);
        assert!(templates.iter().all(|t| t.stroke.len() == 3));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let repository = XmlTemplateDirectory::new(dir.path().join("absent"));
        assert!(matches!(
            repository.load_templates(),
            Err(RecognizerError::Io { .. })
        ));
    }
}
