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
    point::Point,
};

/// Axis-aligned bounding box of a point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Computes the euclidean distance between two points
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Computes the centroid for an array of points
pub fn centroid(points: &[Point]) -> Result<Point> {
    if points.is_empty() {
        return Err(RecognizerError::EmptyInput);
    }
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    let n = points.len() as f64;
    Ok(Point::new(sx / n, sy / n))
}

/// Computes the bounding box of an array of points.
/// A zero width or height is returned as is; callers dividing by it must check.
pub fn bounding_box(points: &[Point]) -> Result<BoundingBox> {
    if points.is_empty() {
        return Err(RecognizerError::EmptyInput);
    }
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Ok(BoundingBox {
        min_x,
        min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}

/// Rotates every point about `pivot` by `radians` (counter-clockwise positive)
pub fn rotate_about(points: &[Point], pivot: &Point, radians: f64) -> Vec<Point> {
    let (sin, cos) = radians.sin_cos();
    points
        .iter()
        .map(|p| {
            let dx = p.x - pivot.x;
            let dy = p.y - pivot.y;
            Point::new(dx * cos - dy * sin + pivot.x, dx * sin + dy * cos + pivot.y)
        })
        .collect()
}

/// Computes the path length for an array of points
pub fn path_length(points: &[Point]) -> f64 {
    points
        .windows(2)
        .map(|w| euclidean_distance(&w[0], &w[1]))
        .sum()
}

/// Sum of the distances between corresponding points of two equally long paths.
/// This is an index-wise correspondence, so both paths must have been resampled
/// to the same number of points.
pub fn path_distance(a: &[Point], b: &[Point]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "paths must have the same number of points");
    a.iter()
        .zip(b)
        .map(|(p, q)| euclidean_distance(p, q))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: &Point, b: &Point) {
        assert!(
            euclidean_distance(a, b) < 1e-9,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn distance_of_huge_coordinates_does_not_overflow() {
        let d = euclidean_distance(&Point::new(0.0, 0.0), &Point::new(3e200, 4e200));
        assert!((d / 5e200 - 1.0).abs() < 1e-12, "{d}");
    }

    #[test]
    fn centroid_of_empty_input_fails() {
        assert!(matches!(centroid(&[]), Err(RecognizerError::EmptyInput)));
        assert!(matches!(bounding_box(&[]), Err(RecognizerError::EmptyInput)));
    }

    #[test]
    fn centroid_is_the_mean() {
        let pts = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(2.0, 6.0)];
        assert_close(&centroid(&pts).unwrap(), &Point::new(2.0, 2.0));
    }

    #[test]
    fn bounding_box_of_a_single_point_is_degenerate() {
        let bb = bounding_box(&[Point::new(3.0, -1.0)]).unwrap();
        assert_eq!(bb, BoundingBox { min_x: 3.0, min_y: -1.0, width: 0.0, height: 0.0 });
    }

    #[test]
    fn bounding_box_spans_extremes() {
        let pts = [Point::new(-1.0, 2.0), Point::new(3.0, -4.0), Point::new(0.5, 0.5)];
        let bb = bounding_box(&pts).unwrap();
        assert_eq!(bb.min_x, -1.0);
        assert_eq!(bb.min_y, -4.0);
        assert_eq!(bb.width, 4.0);
        assert_eq!(bb.height, 6.0);
    }

    #[test]
    fn quarter_turn_is_counter_clockwise() {
        let rotated = rotate_about(&[Point::new(2.0, 1.0)], &Point::new(1.0, 1.0), FRAC_PI_2);
        assert_close(&rotated[0], &Point::new(1.0, 2.0));
    }

    #[test]
    fn rotation_preserves_distances() {
        let pts = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(-2.0, 7.0)];
        let rotated = rotate_about(&pts, &Point::new(10.0, -3.0), 0.7);
        assert!((path_length(&pts) - path_length(&rotated)).abs() < 1e-9);
    }

    #[test]
    fn path_distance_is_index_wise() {
        let a = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let b = [Point::new(0.0, 3.0), Point::new(1.0, 4.0)];
        assert!((path_distance(&a, &b) - 7.0).abs() < 1e-12);
        assert!((path_length(&b) - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
