//! Very simple tool that clips lines against a rectangle and prints the result
use chartgeom::*;
use std::env;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

type Error = Box<dyn std::error::Error>;

#[derive(Debug)]
struct Args {
    rect: Rect,
    extend: Option<(Scalar, Scalar)>,
    lines: Vec<Line>,
}

impl Args {
    fn parse() -> Result<Args, Error> {
        let mut result = Args {
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            extend: None,
            lines: Vec::new(),
        };
        let mut args = env::args();
        let cmd = args.next().unwrap_or_else(|| "clip".to_string());
        let mut help = false;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" => {
                    help = true;
                    break;
                }
                "-r" => {
                    let rect = args.next().ok_or("-r requires argument")?;
                    result.rect = rect.parse()?;
                }
                "-e" => {
                    let extend: Point = args.next().ok_or("-e requires argument")?.parse()?;
                    result.extend = Some((extend.x(), extend.y()));
                }
                _ => {
                    result.lines.push(arg.parse()?);
                }
            }
        }
        if help || result.lines.is_empty() {
            eprintln!(
                "Very simple tool that clips lines against a rectangle and prints the result"
            );
            eprintln!(
                "\nUSAGE:\n    {} [-r <x,y,w,h>] [-e <start,end>] <x1,y1,x2,y2>...",
                cmd
            );
            eprintln!("\nARGS:");
            eprintln!("    -r <x,y,w,h>     clipping rectangle (default 0,0,100,100)");
            eprintln!("    -e <start,end>   extend lines by fractions of their length");
            eprintln!("    <x1,y1,x2,y2>    line to clip");
            std::process::exit(1);
        }
        Ok(result)
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse()?;
    tracing::debug!("[rect] {:?}", args.rect);

    for line in args.lines.iter() {
        let line = match args.extend {
            None => *line,
            Some((start, end)) => {
                tracing::debug_span!("[extend]").in_scope(|| extend_line(*line, start, end))
            }
        };
        let clipped =
            tracing::debug_span!("[clip]", %line).in_scope(|| try_clip_line(line, args.rect))?;
        println!("{} -> {}", line, clipped);
    }

    Ok(())
}
