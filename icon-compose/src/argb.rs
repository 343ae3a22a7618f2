//! Codec for the `ARGB` payloads of ICNS `ic04`/`ic05`/`icsb` elements.
//!
//! The payload is the `ARGB` magic followed by the alpha, red, green and blue
//! planes, each compressed with the ICNS flavour of PackBits.

use image::{Rgba, RgbaImage};

pub const ARGB_MAGIC: &[u8; 4] = b"ARGB";

const MAX_LITERAL: usize = 128;
const MIN_RUN: usize = 3;
const MAX_RUN: usize = 130;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArgbError {
    #[error("missing ARGB header")]
    MissingHeader,
    #[error("ARGB data ends after {0} of {1} bytes")]
    Truncated(usize, usize),
}

pub fn is_argb(data: &[u8]) -> bool {
    data.starts_with(ARGB_MAGIC)
}

pub fn decode(data: &[u8], width: u32, height: u32) -> Result<RgbaImage, ArgbError> {
    let payload = data
        .strip_prefix(ARGB_MAGIC.as_slice())
        .ok_or(ArgbError::MissingHeader)?;
    let plane_len = (width * height) as usize;
    let planes = unpack_bits(payload, plane_len * 4)?;

    let (alpha, rgb) = planes.split_at(plane_len);
    let (red, gb) = rgb.split_at(plane_len);
    let (green, blue) = gb.split_at(plane_len);

    let mut image = RgbaImage::new(width, height);
    for (i, pixel) in image.pixels_mut().enumerate() {
        *pixel = Rgba([red[i], green[i], blue[i], alpha[i]]);
    }
    Ok(image)
}

pub fn encode(image: &RgbaImage) -> Vec<u8> {
    let mut out = ARGB_MAGIC.to_vec();
    for channel in [3, 0, 1, 2] {
        let plane = image.pixels().map(|p| p.0[channel]).collect::<Vec<_>>();
        pack_bits(&plane, &mut out);
    }
    out
}

fn unpack_bits(data: &[u8], expected: usize) -> Result<Vec<u8>, ArgbError> {
    let mut out = Vec::with_capacity(expected);
    let mut input = data.iter().copied();
    while out.len() < expected {
        let truncated = |len| ArgbError::Truncated(len, expected);
        let control = input.next().ok_or_else(|| truncated(out.len()))? as usize;
        if control < 0x80 {
            for _ in 0..=control {
                out.push(input.next().ok_or_else(|| truncated(out.len()))?);
            }
        } else {
            let value = input.next().ok_or_else(|| truncated(out.len()))?;
            out.extend(std::iter::repeat(value).take(control - 0x80 + MIN_RUN));
        }
    }
    out.truncate(expected);
    Ok(out)
}

fn pack_bits(data: &[u8], out: &mut Vec<u8>) {
    let mut i = 0;
    while i < data.len() {
        let run = run_length(&data[i..]);
        if run >= MIN_RUN {
            out.push((0x80 + run - MIN_RUN) as u8);
            out.push(data[i]);
            i += run;
            continue;
        }

        let start = i;
        while i < data.len() && i - start < MAX_LITERAL && run_length(&data[i..]) < MIN_RUN {
            i += 1;
        }
        out.push((i - start - 1) as u8);
        out.extend_from_slice(&data[start..i]);
    }
}

fn run_length(data: &[u8]) -> usize {
    data.iter()
        .take(MAX_RUN)
        .take_while(|&&b| b == data[0])
        .count()
}
