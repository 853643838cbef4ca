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
    geometry,
    parameters::RecognizerParameters,
    point::Point,
};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// A bounding box side shorter than this fraction of the other side counts as zero
const DEGENERATE_EXTENT_RATIO: f64 = 1e-9;

/// A single stroke as captured from the input device, in drawing order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        Stroke { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for Stroke {
    fn from(points: Vec<Point>) -> Self {
        Stroke::new(points)
    }
}

impl FromIterator<(f64, f64)> for Stroke {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Stroke::new(iter.into_iter().map(Point::from).collect())
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Stroke::new(iter.into_iter().collect())
    }
}

/// A stroke after the $1 normalization: resampled to a fixed number of points,
/// rotated so its indicative angle is zero, scaled so both axes span the reference
/// square and translated so its centroid is the origin.
///
/// Only [`normalize`] produces these.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Point>", into = "Vec<Point>"))]
pub struct NormalizedShape {
    points: Vec<Point>,
}

impl NormalizedShape {
    #[cfg(test)]
    pub(crate) fn from_points_unchecked(points: Vec<Point>) -> Self {
        NormalizedShape { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Only shapes with finite coordinates are accepted back from storage
#[cfg(feature = "serde")]
impl TryFrom<Vec<Point>> for NormalizedShape {
    type Error = RecognizerError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(RecognizerError::EmptyInput);
        }
        if !points.iter().all(Point::is_finite) {
            return Err(RecognizerError::DegenerateShape("non-finite coordinate"));
        }
        Ok(NormalizedShape { points })
    }
}

#[cfg(feature = "serde")]
impl From<NormalizedShape> for Vec<Point> {
    fn from(shape: NormalizedShape) -> Self {
        shape.points
    }
}

/// Normalizes a stroke: resample, rotate to the indicative angle, scale and translate to origin.
/// Templates and candidates must both go through this with the same parameters.
pub fn normalize(stroke: &Stroke, params: &RecognizerParameters) -> Result<NormalizedShape> {
    params.validate()?;
    if stroke.len() < 2 {
        return Err(RecognizerError::InsufficientPoints { found: stroke.len() });
    }
    let points = resample(&stroke.points, params.num_points)?;
    let radians = indicative_angle(&points)?;
    let c = geometry::centroid(&points)?;
    let points = geometry::rotate_about(&points, &c, -radians);
    let points = scale(&points, params.square_size)?;
    let points = translate_to_origin(&points)?;
    Ok(NormalizedShape { points })
}

/// Resamples the array of points into n points equally spaced along the path
fn resample(points: &[Point], n: usize) -> Result<Vec<Point>> {
    let interval = geometry::path_length(points) / (n - 1) as f64;
    if !(interval.is_finite() && interval > 0.0) {
        return Err(RecognizerError::DegenerateShape("stroke has zero length"));
    }

    let mut new_points = Vec::with_capacity(n);
    new_points.push(points[0]);
    let mut d = 0.0;

    for pair in points.windows(2) {
        let (mut start, end) = (pair[0], pair[1]);
        let mut dist = geometry::euclidean_distance(&start, &end);
        while d + dist >= interval && new_points.len() < n {
            let t = ((interval - d) / dist).clamp(0.0, 1.0);
            let q = start.lerp(end, t);
            new_points.push(q);
            // the rest of the segment starts at the new point
            dist = geometry::euclidean_distance(&q, &end);
            d = 0.0;
            start = q;
        }
        d += dist;
    }
    // sometimes we fall a rounding-error short of adding the last point, so add it if so
    if let Some(last) = points.last() {
        while new_points.len() < n {
            new_points.push(*last);
        }
    }
    Ok(new_points)
}

/// Angle of the vector from the first point to the centroid
fn indicative_angle(points: &[Point]) -> Result<f64> {
    let c = geometry::centroid(points)?;
    let first = points[0];
    Ok((c.y - first.y).atan2(c.x - first.x))
}

/// Scales each axis independently so the bounding box becomes size x size
fn scale(points: &[Point], size: f64) -> Result<Vec<Point>> {
    let b = geometry::bounding_box(points)?;
    let tolerance = DEGENERATE_EXTENT_RATIO * b.width.max(b.height);
    if b.width <= tolerance {
        return Err(RecognizerError::DegenerateShape("bounding box has zero width"));
    }
    if b.height <= tolerance {
        return Err(RecognizerError::DegenerateShape("bounding box has zero height"));
    }
    let (sx, sy) = (size / b.width, size / b.height);
    Ok(points
        .iter()
        .map(|p| Point::new(p.x * sx, p.y * sy))
        .collect())
}

/// Translates the array of points so that its centroid is the origin
fn translate_to_origin(points: &[Point]) -> Result<Vec<Point>> {
    let c = geometry::centroid(points)?;
    Ok(points
        .iter()
        .map(|p| Point::new(p.x - c.x, p.y - c.y))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Stroke {
        [(0.0, 0.0), (50.0, 100.0), (100.0, 0.0), (10.0, 5.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn too_few_points_are_rejected() {
        let params = RecognizerParameters::default();
        assert!(matches!(
            normalize(&Stroke::default(), &params),
            Err(RecognizerError::InsufficientPoints { found: 0 })
        ));
        assert!(matches!(
            normalize(&Stroke::new(vec![Point::new(1.0, 1.0)]), &params),
            Err(RecognizerError::InsufficientPoints { found: 1 })
        ));
    }

    #[test]
    fn coincident_points_are_degenerate() {
        let stroke = Stroke::new(vec![Point::new(7.0, 7.0); 10]);
        assert!(matches!(
            normalize(&stroke, &RecognizerParameters::default()),
            Err(RecognizerError::DegenerateShape(_))
        ));
    }

    #[test]
    fn straight_lines_are_degenerate() {
        // after rotating to the indicative angle a line has no height
        for stroke in [
            Stroke::from_iter([(0.0, 0.0), (10.0, 10.0), (30.0, 30.0)]),
            Stroke::from_iter([(5.0, 0.0), (5.0, 100.0)]),
        ] {
            assert!(matches!(
                normalize(&stroke, &RecognizerParameters::default()),
                Err(RecognizerError::DegenerateShape(_))
            ));
        }
    }

    #[test]
    fn resample_spaces_points_evenly() {
        let pts = [Point::new(0.0, 0.0), Point::new(3.0, 0.0), Point::new(3.0, 3.0)];
        let resampled = resample(&pts, 7).unwrap();
        assert_eq!(resampled.len(), 7);
        for pair in resampled.windows(2) {
            let d = geometry::euclidean_distance(&pair[0], &pair[1]);
            // chords are never longer than the arc-length interval
            assert!(d <= 1.0 + 1e-9 && d > 0.7, "unexpected spacing {d}");
        }
        assert_eq!(resampled[0], pts[0]);
        assert!(geometry::euclidean_distance(&resampled[6], &pts[2]) < 1e-9);
    }

    #[test]
    fn resample_skips_repeated_points() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 0.0),
        ];
        let resampled = resample(&pts, 5).unwrap();
        let xs: Vec<f64> = resampled.iter().map(|p| p.x).collect();
        for (x, expected) in xs.iter().zip([0.0, 1.0, 2.0, 3.0, 4.0]) {
            assert!((x - expected).abs() < 1e-9, "{xs:?}");
        }
    }

    #[test]
    fn normalized_shape_has_fixed_length() {
        for n in [3, 16, 64, 200] {
            let params = RecognizerParameters { num_points: n, ..Default::default() };
            assert_eq!(normalize(&triangle(), &params).unwrap().len(), n);
        }
    }

    #[test]
    fn normalized_shape_is_centered_and_spans_the_square() {
        let params = RecognizerParameters::default();
        let shape = normalize(&triangle(), &params).unwrap();
        let c = geometry::centroid(shape.points()).unwrap();
        assert!(c.x.abs() < 1e-6 * params.square_size);
        assert!(c.y.abs() < 1e-6 * params.square_size);
        let b = geometry::bounding_box(shape.points()).unwrap();
        assert!((b.width - params.square_size).abs() < 1e-9);
        assert!((b.height - params.square_size).abs() < 1e-9);
    }

    #[test]
    fn first_point_lies_left_of_centroid_on_the_x_axis() {
        let shape = normalize(&triangle(), &RecognizerParameters::default()).unwrap();
        let first = shape.points()[0];
        assert!(first.x < 0.0);
        assert!(first.y.abs() < 1e-6);
    }

    #[test]
    fn huge_strokes_normalize() {
        let huge: Stroke = triangle()
            .points
            .iter()
            .map(|p| (p.x * 1e200, p.y * 1e200))
            .collect();
        let shape = normalize(&huge, &RecognizerParameters::default()).unwrap();
        assert_eq!(shape.len(), 64);
        assert!(shape.points().iter().all(Point::is_finite));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn stored_shapes_must_be_finite() {
        let points = vec![Point::new(1.0, 2.0), Point::new(f64::NAN, 0.0)];
        assert!(matches!(
            NormalizedShape::try_from(points),
            Err(RecognizerError::DegenerateShape(_))
        ));
        assert!(matches!(
            NormalizedShape::try_from(Vec::new()),
            Err(RecognizerError::EmptyInput)
        ));
    }

    #[test]
    fn invalid_parameters_are_reported_before_anything_else() {
        let params = RecognizerParameters { num_points: 0, ..Default::default() };
        assert!(matches!(
            normalize(&Stroke::default(), &params),
            Err(RecognizerError::InvalidParameter(_))
        ));
    }
}
