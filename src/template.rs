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
    gesture::{normalize, NormalizedShape, Stroke},
    parameters::RecognizerParameters,
};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// A template as it comes out of a template repository, before normalization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawTemplate {
    pub label: String,
    pub stroke: Stroke,
}

impl RawTemplate {
    pub fn new(label: impl Into<String>, stroke: impl Into<Stroke>) -> Self {
        RawTemplate {
            label: label.into(),
            stroke: stroke.into(),
        }
    }
}

/// A labeled, normalized reference gesture.
/// Several templates may share a label; the closest one decides the match.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Template {
    pub label: String,
    pub shape: NormalizedShape,
}

impl Template {
    /// Constructs a new template from a stroke and a label
    pub fn new(label: &str, stroke: &Stroke, params: &RecognizerParameters) -> Result<Self> {
        Ok(Template {
            label: label.into(),
            shape: normalize(stroke, params)?,
        })
    }
}

/// Source of raw template definitions.
pub trait TemplateRepository {
    fn load_templates(&self) -> Result<Vec<RawTemplate>>;
}

impl TemplateRepository for [RawTemplate] {
    fn load_templates(&self) -> Result<Vec<RawTemplate>> {
        Ok(self.to_vec())
    }
}

impl TemplateRepository for Vec<RawTemplate> {
    fn load_templates(&self) -> Result<Vec<RawTemplate>> {
        self.as_slice().load_templates()
    }
}

/// The ordered, non-empty template library a recognizer matches against.
///
/// The order of the templates decides ties: the first template with the
/// minimal distance wins.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateSet {
    templates: Vec<Template>,
    params: RecognizerParameters,
}

impl TemplateSet {
    /// Normalizes every raw template, keeping their order
    pub fn build<I>(raw_templates: I, params: RecognizerParameters) -> Result<Self>
    where
        I: IntoIterator<Item = RawTemplate>,
    {
        params.validate()?;
        let templates = raw_templates
            .into_iter()
            .map(|raw| {
                Template::new(&raw.label, &raw.stroke, &params).map_err(|e| {
                    RecognizerError::InvalidTemplate {
                        label: raw.label.clone(),
                        source: Box::new(e),
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;
        if templates.is_empty() {
            return Err(RecognizerError::NoTemplates);
        }
        tracing::debug!(count = templates.len(), "built template set");
        Ok(TemplateSet { templates, params })
    }

    pub fn from_repository<R>(repository: &R, params: RecognizerParameters) -> Result<Self>
    where
        R: TemplateRepository + ?Sized,
    {
        Self::build(repository.load_templates()?, params)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false for a built set; kept for the usual collection API
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Distinct labels in order of first appearance
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for t in &self.templates {
            if !labels.contains(&t.label.as_str()) {
                labels.push(&t.label);
            }
        }
        labels
    }

    pub fn parameters(&self) -> &RecognizerParameters {
        &self.params
    }
}

impl<'a> IntoIterator for &'a TemplateSet {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caret() -> Stroke {
        Stroke::from_iter([(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)])
    }

    fn zigzag() -> Stroke {
        Stroke::from_iter([(0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (10.0, 10.0)])
    }

    #[test]
    fn empty_input_has_no_templates() {
        let empty: Vec<RawTemplate> = Vec::new();
        assert!(matches!(
            TemplateSet::build(empty, RecognizerParameters::default()),
            Err(RecognizerError::NoTemplates)
        ));
    }

    #[test]
    fn order_and_labels_are_preserved() {
        let raw = vec![
            RawTemplate::new("caret", caret()),
            RawTemplate::new("z", zigzag()),
            RawTemplate::new("caret", caret()),
        ];
        let set = TemplateSet::from_repository(&raw, RecognizerParameters::default()).unwrap();
        let labels: Vec<&str> = set.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["caret", "z", "caret"]);
        assert_eq!(set.labels(), ["caret", "z"]);
        assert!(set.iter().all(|t| t.shape.len() == 64));
    }

    #[test]
    fn failing_template_is_named() {
        let raw = vec![
            RawTemplate::new("caret", caret()),
            RawTemplate::new("dot", Stroke::from_iter([(1.0, 1.0)])),
        ];
        match TemplateSet::build(raw, RecognizerParameters::default()) {
            Err(RecognizerError::InvalidTemplate { label, source }) => {
                assert_eq!(label, "dot");
                assert!(matches!(*source, RecognizerError::InsufficientPoints { found: 1 }));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}
