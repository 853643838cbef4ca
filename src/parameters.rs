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

use crate::error::{RecognizerError, Result};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Default number of points on the gesture path
pub const NUM_POINTS: usize = 64;
/// Default side of the reference square gestures are scaled to
pub const SQUARE_SIZE: f64 = 250.0;
/// Default half-width of the rotation search window, in degrees
pub const ANGLE_RANGE_DEGREES: f64 = 45.0;
/// Default convergence tolerance of the rotation search, in degrees
pub const ANGLE_PRECISION_DEGREES: f64 = 2.0;

/// Tuning knobs of the $1 recognizer.
///
/// The same parameters must be used to normalize templates and candidates,
/// which is why a [`TemplateSet`](crate::template::TemplateSet) keeps the
/// parameters it was built with.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecognizerParameters {
    /// Number of points every stroke is resampled to.
    pub num_points: usize,
    /// Both axes of a normalized shape span exactly this length.
    pub square_size: f64,
    /// The rotation search covers [-angle_range, +angle_range] radians.
    pub angle_range: f64,
    /// The rotation search stops once its bracket is narrower than this, in radians.
    pub angle_precision: f64,
}

impl Default for RecognizerParameters {
    fn default() -> Self {
        RecognizerParameters {
            num_points: NUM_POINTS,
            square_size: SQUARE_SIZE,
            angle_range: ANGLE_RANGE_DEGREES.to_radians(),
            angle_precision: ANGLE_PRECISION_DEGREES.to_radians(),
        }
    }
}

impl RecognizerParameters {
    /// Default parameters with the rotation search given in degrees
    pub fn with_degrees(angle_range: f64, angle_precision: f64) -> Self {
        RecognizerParameters {
            angle_range: angle_range.to_radians(),
            angle_precision: angle_precision.to_radians(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_points < 2 {
            return Err(RecognizerError::InvalidParameter(format!(
                "num_points must be at least 2, got {}",
                self.num_points
            )));
        }
        if !(self.square_size.is_finite() && self.square_size > 0.0) {
            return Err(RecognizerError::InvalidParameter(format!(
                "square_size must be positive, got {}",
                self.square_size
            )));
        }
        if !(self.angle_range.is_finite() && self.angle_range >= 0.0) {
            return Err(RecognizerError::InvalidParameter(format!(
                "angle_range must be non-negative, got {}",
                self.angle_range
            )));
        }
        // a zero precision would never let the search terminate
        if !(self.angle_precision.is_finite() && self.angle_precision > 0.0) {
            return Err(RecognizerError::InvalidParameter(format!(
                "angle_precision must be positive, got {}",
                self.angle_precision
            )));
        }
        Ok(())
    }

    /// Half of the diagonal of the reference square, used to turn distances into scores
    pub(crate) fn half_diagonal(&self) -> f64 {
        0.5 * (2.0 * self.square_size * self.square_size).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = RecognizerParameters::default();
        assert_eq!(params.num_points, 64);
        assert_eq!(params.square_size, 250.0);
        assert!((params.angle_range - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_unusable_values() {
        let bad = [
            RecognizerParameters { num_points: 1, ..Default::default() },
            RecognizerParameters { square_size: 0.0, ..Default::default() },
            RecognizerParameters { square_size: f64::NAN, ..Default::default() },
            RecognizerParameters { angle_range: -1.0, ..Default::default() },
            RecognizerParameters { angle_precision: 0.0, ..Default::default() },
        ];
        for params in bad {
            assert!(
                matches!(params.validate(), Err(RecognizerError::InvalidParameter(_))),
                "{params:?} should be rejected"
            );
        }
    }

    #[test]
    fn degrees_are_converted() {
        let params = RecognizerParameters::with_degrees(90.0, 1.0);
        assert!((params.angle_range - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((params.angle_precision - 1.0_f64.to_radians()).abs() < 1e-12);
    }
}
