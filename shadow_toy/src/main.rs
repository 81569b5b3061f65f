// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a single shadow into a PNG file.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use shadow_common::config::ShadowConfig;
use shadow_common::peniko::Color;
use shadow_cpu::{BlurredShadow, Pixmap, ShadowRenderer, ShadowSynthesizer};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = ShadowConfig::new(args.corner_radius, args.blur_radius, args.color)
        .context("invalid shadow parameters")?;
    let pixmap = match args.variant {
        Variant::Gradient => ShadowSynthesizer::new().render(&config, args.width, args.height),
        Variant::Blurred => BlurredShadow::new().render(&config, args.width, args.height),
    }
    .context("failed to render the shadow")?;

    if pixmap.is_empty() {
        bail!(
            "a {}x{} canvas leaves nothing to draw on",
            args.width,
            args.height
        );
    }

    let (width, height) = (pixmap.width(), pixmap.height());
    write_png(pixmap, &args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!("Wrote result ({width}x{height}) to {:?}", args.out);
    Ok(())
}

fn write_png(pixmap: Pixmap, path: &Path) -> Result<()> {
    let (width, height) = (u32::from(pixmap.width()), u32::from(pixmap.height()));
    let file = BufWriter::new(File::create(path)?);

    let mut png_encoder = png::Encoder::new(file, width, height);
    png_encoder.set_color(png::ColorType::Rgba);
    png_encoder.set_depth(png::BitDepth::Eight);
    let mut writer = png_encoder.write_header()?;
    writer.write_image_data(&pixmap.take_unpremultiplied())?;
    writer.finish()?;
    Ok(())
}

#[derive(Parser, Debug)]
#[command(about, long_about = None, bin_name = "cargo run -p shadow_toy --")]
struct Args {
    /// Width of the host in pixels
    #[arg(long, default_value_t = 200)]
    width: u32,
    /// Height of the host in pixels
    #[arg(long, default_value_t = 100)]
    height: u32,
    /// Radius of the panel's rounded corners
    #[arg(long, default_value_t = 20.0)]
    corner_radius: f64,
    /// Width of the shadow's falloff band
    #[arg(long, default_value_t = 20.0)]
    blur_radius: f64,
    /// Shadow color as `#RRGGBB` or `#RRGGBBAA`
    #[arg(long, default_value = "#00000080", value_parser = parse_color)]
    color: Color,
    #[arg(long, value_enum, default_value_t = Variant::Gradient)]
    variant: Variant,
    /// File to store the result into
    #[arg(long, short, default_value_os_t = default_out())]
    out: PathBuf,
}

/// How the shadow is drawn.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Variant {
    /// Corner wedges and edge gradients under a flat panel
    Gradient,
    /// A Gaussian-blurred rounded rectangle
    Blurred,
}

fn default_out() -> PathBuf {
    PathBuf::from("shadow.png")
}

fn parse_color(s: &str) -> Result<Color> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        bail!("expected `#RRGGBB` or `#RRGGBBAA`, got `{s}`");
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid hex in `{s}`"))
    };
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Color::rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_color("#00000080").unwrap(), Color::rgba8(0, 0, 0, 128));
        assert_eq!(parse_color("ff8000").unwrap(), Color::rgba8(255, 128, 0, 255));
        assert!(parse_color("#fff").is_err());
        assert!(parse_color("#gg0000").is_err());
    }

    #[test]
    fn args_are_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
