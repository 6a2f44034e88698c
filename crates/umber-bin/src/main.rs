/*
 * Copyright (c) 2024.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Command line shell around the umber codecs
//!
//! Reads an ascii ppm file, decodes it and writes the pixels back
//! out as a png file. All error handling lives here, the codecs
//! only ever return typed errors.
use std::fmt::{Debug, Formatter};
use std::fs::{read_to_string, File};
use std::io::BufWriter;
use std::process::ExitCode;

use log::{error, info};
use umber_core::options::EncoderOptions;
use umber_png::{PngEncodeErrors, PngEncoder};
use umber_ppm::{PpmDecodeErrors, PpmDecoder};

mod cmd_args;

enum CliErrors {
    Io(std::io::Error),
    Decode(PpmDecodeErrors),
    Encode(PngEncodeErrors)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => writeln!(f, "{err}"),
            Self::Decode(err) => writeln!(f, "{err:?}"),
            Self::Encode(err) => writeln!(f, "{err:?}")
        }
    }
}

impl From<std::io::Error> for CliErrors {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<PpmDecodeErrors> for CliErrors {
    fn from(err: PpmDecodeErrors) -> Self {
        Self::Decode(err)
    }
}

impl From<PngEncodeErrors> for CliErrors {
    fn from(err: PngEncodeErrors) -> Self {
        Self::Encode(err)
    }
}

fn main() -> ExitCode {
    let options = cmd_args::create_cmd_args().get_matches();

    cmd_args::setup_logger(&options);

    let source = options.get_one::<String>("in").unwrap();
    let dest = options.get_one::<String>("out").unwrap();

    match convert(source, dest) {
        Ok(()) => {
            println!("Processed {source} into {dest}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Failed to convert {source} into {dest}, reason {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn convert(source: &str, dest: &str) -> Result<(), CliErrors> {
    let contents = read_to_string(source)?;

    let mut decoder = PpmDecoder::new(&contents);
    let pixels = decoder.decode()?;

    // headers are decoded once decode returns successfully
    let (width, height) = decoder.get_dimensions().unwrap();
    let colorspace = decoder.get_colorspace().unwrap();
    let depth = decoder.get_bit_depth().unwrap();

    info!("Decoded a {width}x{height} pixmap");

    let encoder_options = EncoderOptions::new(width, height, colorspace, depth);

    let file = File::create(dest)?;
    let mut sink = BufWriter::new(file);

    let bytes_written = PngEncoder::new(&pixels, encoder_options).encode(&mut sink)?;

    info!("Wrote {bytes_written} bytes into {dest}");

    Ok(())
}
