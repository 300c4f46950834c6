//! Command line parsing.

use std::path::PathBuf;

use fractals::{Color, Coloring, FractalKind};
use geometry::Extent;

use crate::{config::Config, Error};

pub const USAGE: &str = "\
Usage: fractal-viewer [OPTIONS]

Options:
  --kind <KIND>      sierpinski, square-diamond, koch, circle (or 1-4)
  --depth <N>        recursion depth, or segment count for circles
  --size <PX>        window or image size in pixels (square)
  --seed <N>         seed for the random colors
  --solid            draw every vertex white instead of random colors
  --snapshot <PATH>  render one frame to a PNG file and exit
  -h, --help         print this message

Keys:
  Left/Right, -/+    depth -1/+1
  Down/Up            depth -10/+10
  Home               depth 0
  1-4                select fractal
  C                  new random colors
  S                  save snapshot
  Esc, Q             quit";

/// What the command line asked for.
#[derive(Debug)]
pub struct Options {
    pub config: Config,
    /// Render headless to this path instead of opening a window.
    pub snapshot: Option<PathBuf>,
    pub help: bool,
}

/// Parses the arguments following the program name. Later flags override
/// earlier ones, and `--depth` applies after `--kind` regardless of order.
pub fn parse<I>(args: I) -> Result<Options, Error>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut snapshot = None;
    let mut help = false;
    let mut kind = None;
    let mut depth = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--kind" => kind = Some(value(&arg, args.next())?.parse::<FractalKind>()?),
            "--depth" => depth = Some(number::<u32>(&arg, args.next())?),
            "--size" => {
                let px = number::<u32>(&arg, args.next())?;
                if px == 0 {
                    return Err(Error::Args("--size must be at least 1".to_owned()));
                }
                config.size = Extent::new(px, px);
            }
            "--seed" => config.seed = Some(number::<u64>(&arg, args.next())?),
            "--solid" => config.coloring = Coloring::Solid(Color::WHITE),
            "--snapshot" => snapshot = Some(PathBuf::from(value(&arg, args.next())?)),
            "-h" | "--help" => help = true,
            other => return Err(Error::Args(format!("unknown argument '{other}'"))),
        }
    }

    if let Some(kind) = kind {
        config.request = config.request.with_kind(kind).with_depth(kind.initial_depth());
    }

    if let Some(depth) = depth {
        config.request = config.request.with_depth(depth);
    }

    Ok(Options {
        config,
        snapshot,
        help,
    })
}

fn value(flag: &str, next: Option<String>) -> Result<String, Error> {
    next.ok_or_else(|| Error::Args(format!("{flag} expects a value")))
}

fn number<T: std::str::FromStr>(flag: &str, next: Option<String>) -> Result<T, Error> {
    let text = value(flag, next)?;
    text.parse()
        .map_err(|_| Error::Args(format!("{flag} expects a number, got '{text}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(args: &str) -> Result<Options, Error> {
        parse(args.split_whitespace().map(str::to_owned))
    }

    #[test]
    fn defaults() {
        let options = parse_str("").unwrap();
        assert!(options.snapshot.is_none());
        assert!(!options.help);
        assert_eq!(options.config.request.kind(), FractalKind::Sierpinski);
        assert_eq!(options.config.request.depth(), 0);
        assert_eq!(options.config.size, Extent::new(800, 800));
    }

    #[test]
    fn kind_and_depth() {
        let options = parse_str("--depth 4 --kind koch").unwrap();
        assert_eq!(options.config.request.kind(), FractalKind::KochSnowflake);
        assert_eq!(options.config.request.depth(), 4);

        let options = parse_str("--kind 2 --depth 99").unwrap();
        assert_eq!(options.config.request.kind(), FractalKind::SquareDiamond);
        assert_eq!(options.config.request.depth(), 10);
    }

    #[test]
    fn circle_starts_round() {
        let options = parse_str("--kind circle").unwrap();
        assert_eq!(
            options.config.request.depth(),
            FractalKind::Circle.initial_depth()
        );
    }

    #[test]
    fn snapshot_and_colors() {
        let options = parse_str("--snapshot out.png --seed 7 --solid --size 64").unwrap();
        assert_eq!(options.snapshot, Some(PathBuf::from("out.png")));
        assert_eq!(options.config.seed, Some(7));
        assert_eq!(options.config.coloring, Coloring::Solid(Color::WHITE));
        assert_eq!(options.config.size, Extent::new(64, 64));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse_str("--depth"), Err(Error::Args(_))));
        assert!(matches!(parse_str("--depth lots"), Err(Error::Args(_))));
        assert!(matches!(parse_str("--size 0"), Err(Error::Args(_))));
        assert!(matches!(parse_str("--frobnicate"), Err(Error::Args(_))));
        assert!(matches!(
            parse_str("--kind mandelbrot"),
            Err(Error::Fractal(fractals::Error::UnknownKind(_)))
        ));
    }
}
