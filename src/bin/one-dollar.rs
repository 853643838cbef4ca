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

use clap::Parser;
use one_dollar_recognizer::{
    parse_gesture_xml, Recognizer, RecognizerParameters, XmlTemplateDirectory,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "one-dollar", about = "Recognize unistroke gestures with the $1 recognizer")]
struct Cli {
    /// Directory of template gesture XML files (searched recursively)
    #[arg(short, long)]
    templates: PathBuf,

    /// Gesture XML files to recognize
    #[arg(required = true)]
    strokes: Vec<PathBuf>,

    /// Number of points every stroke is resampled to
    #[arg(long, default_value = "64")]
    num_points: usize,

    /// Side of the reference square gestures are scaled to
    #[arg(long, default_value = "250")]
    square_size: f64,

    /// Half-width of the rotation search, in degrees
    #[arg(long, default_value = "45")]
    angle_range: f64,

    /// Convergence tolerance of the rotation search, in degrees
    #[arg(long, default_value = "2")]
    angle_precision: f64,

    /// Log the distance to every template (same as RUST_LOG=debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let params = RecognizerParameters {
        num_points: cli.num_points,
        square_size: cli.square_size,
        ..RecognizerParameters::with_degrees(cli.angle_range, cli.angle_precision)
    };
    let recognizer =
        Recognizer::from_repository(&XmlTemplateDirectory::new(&cli.templates), params)?;
    tracing::info!(
        templates = recognizer.templates().len(),
        labels = ?recognizer.templates().labels(),
        "template library loaded"
    );

    for path in &cli.strokes {
        let text = std::fs::read_to_string(path)?;
        let stroke = parse_gesture_xml(&text, path)?;
        match recognizer.recognize_match(&stroke) {
            Ok(m) => println!("{}\t{}\t{:.3}\t{:.3}", path.display(), m.label, m.distance, m.score),
            // a bad stroke should not stop the remaining files
            Err(e) => eprintln!("{}: {e}", path.display()),
        }
    }
    Ok(())
}
