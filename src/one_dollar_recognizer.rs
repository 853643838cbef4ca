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
    golden_section::distance_at_best_angle,
    parameters::RecognizerParameters,
    template::{RawTemplate, Template, TemplateRepository, TemplateSet},
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Outcome of a recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Label of the closest template
    pub label: String,
    /// Path distance to the closest template at its best angle
    pub distance: f64,
    /// 1 for a perfect match, decreasing as the mean point distance grows
    /// relative to half the diagonal of the reference square
    pub score: f64,
    /// Position of the closest template in the template set
    pub index: usize,
}

/// Best-angle distance from a candidate to one template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDistance {
    pub label: String,
    pub distance: f64,
    pub index: usize,
}

/// Main function of the $1 recognizer.
/// Classifies a stroke against a set of templates normalized with the same parameters.
/// Returns the closest template; on equal distances the earlier template wins.
pub fn classify(
    stroke: &Stroke,
    templates: &[Template],
    params: &RecognizerParameters,
) -> Result<Match> {
    let candidate = normalize(stroke, params)?;
    let distances = best_angle_distances(&candidate, templates, params)?;

    let mut best_index = 0;
    let mut min_distance = f64::INFINITY;
    for (i, &d) in distances.iter().enumerate() {
        if d < min_distance {
            min_distance = d;
            best_index = i;
        }
    }
    if !min_distance.is_finite() {
        return Err(RecognizerError::DegenerateShape("no template has a finite distance"));
    }
    let mean = min_distance / params.num_points as f64;
    Ok(Match {
        label: templates[best_index].label.clone(),
        distance: min_distance,
        score: 1.0 - mean / params.half_diagonal(),
        index: best_index,
    })
}

/// Distance from the candidate to every template, in template order
fn best_angle_distances(
    candidate: &NormalizedShape,
    templates: &[Template],
    params: &RecognizerParameters,
) -> Result<Vec<f64>> {
    if templates.is_empty() {
        return Err(RecognizerError::NoTemplates);
    }
    if let Some(t) = templates.iter().find(|t| t.shape.len() != candidate.len()) {
        return Err(RecognizerError::ShapeMismatch {
            expected: candidate.len(),
            found: t.shape.len(),
        });
    }

    let distance = |(i, template): (usize, &Template)| -> Result<f64> {
        let d = distance_at_best_angle(
            candidate,
            &template.shape,
            params.angle_range,
            params.angle_precision,
        )?;
        tracing::debug!(index = i, label = %template.label, distance = d, "distance at best angle");
        Ok(d)
    };

    // collecting keeps template order, so ties never depend on which worker finished first
    #[cfg(feature = "rayon")]
    let distances: Result<Vec<f64>> = templates.par_iter().enumerate().map(distance).collect();
    #[cfg(not(feature = "rayon"))]
    let distances: Result<Vec<f64>> = templates.iter().enumerate().map(distance).collect();
    distances
}

/// A $1 recognizer owning an immutable template library.
#[derive(Debug, Clone)]
pub struct Recognizer {
    templates: TemplateSet,
}

impl Recognizer {
    /// Normalizes the raw templates into a new recognizer
    pub fn new<I>(raw_templates: I, params: RecognizerParameters) -> Result<Self>
    where
        I: IntoIterator<Item = RawTemplate>,
    {
        Ok(Self::from_template_set(TemplateSet::build(raw_templates, params)?))
    }

    pub fn from_repository<R>(repository: &R, params: RecognizerParameters) -> Result<Self>
    where
        R: TemplateRepository + ?Sized,
    {
        Ok(Self::from_template_set(TemplateSet::from_repository(repository, params)?))
    }

    pub fn from_template_set(templates: TemplateSet) -> Self {
        Recognizer { templates }
    }

    /// Returns the label of the template closest to the stroke
    pub fn recognize(&self, stroke: &Stroke) -> Result<String> {
        self.recognize_match(stroke).map(|m| m.label)
    }

    pub fn recognize_match(&self, stroke: &Stroke) -> Result<Match> {
        classify(stroke, self.templates.templates(), self.templates.parameters())
    }

    /// Best-angle distance to every template, in template order
    pub fn distances(&self, stroke: &Stroke) -> Result<Vec<TemplateDistance>> {
        let params = self.templates.parameters();
        let candidate = normalize(stroke, params)?;
        let distances = best_angle_distances(&candidate, self.templates.templates(), params)?;
        Ok(self
            .templates
            .iter()
            .zip(distances)
            .enumerate()
            .map(|(index, (t, distance))| TemplateDistance {
                label: t.label.clone(),
                distance,
                index,
            })
            .collect())
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    pub fn parameters(&self) -> &RecognizerParameters {
        self.templates.parameters()
    }
}
