//! Command-line options and the render/encode driver.

use std::path::{Path, PathBuf};

use ncode_core::{FontSet, FontTable, TextAlign, ncode};

use crate::canvas::Canvas;
use crate::config::{Config, parse_align};

/// Parsed command line. `None` means "use the config value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub ascii_font: Option<PathBuf>,
    pub ncode_font: Option<PathBuf>,
    pub align: Option<TextAlign>,
    pub max_width: Option<i32>,
    pub simple: bool,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub pbm: bool,
    /// Drop blank rows above and below the text.
    pub trim: bool,
    pub encode: bool,
    pub verbose: bool,
    /// Positional words, joined with spaces. `None` reads stdin.
    pub text: Option<String>,
}

fn value(name: &str, it: &mut impl Iterator<Item = String>) -> Result<String, String> {
    it.next().ok_or_else(|| format!("{name} needs a value"))
}

fn number<T>(name: &str, it: &mut impl Iterator<Item = String>) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = value(name, it)?;
    raw.parse().map_err(|e| format!("{name}: '{raw}': {e}"))
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut out = Self::default();
        let mut words: Vec<String> = Vec::new();
        let mut it = args.into_iter();
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--config" => out.config = Some(value(&arg, &mut it)?.into()),
                "--ascii-font" => out.ascii_font = Some(value(&arg, &mut it)?.into()),
                "--ncode-font" => out.ncode_font = Some(value(&arg, &mut it)?.into()),
                "--align" => {
                    let raw = value(&arg, &mut it)?;
                    match raw.as_str() {
                        "left" | "center" | "centre" | "right" => out.align = Some(parse_align(&raw)),
                        _ => return Err(format!("--align: unknown alignment '{raw}'")),
                    }
                }
                "--max-width" => out.max_width = Some(number(&arg, &mut it)?),
                "--width" => out.width = Some(number(&arg, &mut it)?),
                "--height" => out.height = Some(number(&arg, &mut it)?),
                "--simple" => out.simple = true,
                "--pbm" => out.pbm = true,
                "--trim" => out.trim = true,
                "--encode" => out.encode = true,
                "--verbose" | "-v" => out.verbose = true,
                "--" => words.extend(it.by_ref()),
                flag if flag.starts_with("--") => return Err(format!("unknown option '{flag}'")),
                _ => words.push(arg),
            }
        }
        if !words.is_empty() {
            out.text = Some(words.join(" "));
        }
        Ok(out)
    }

    /// Overlay command-line choices on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.ascii_font {
            config.font.ascii = Some(path.clone());
        }
        if let Some(path) = &self.ncode_font {
            config.font.ncode = Some(path.clone());
        }
        if let Some(align) = self.align {
            config.render.align = match align {
                TextAlign::Left => "left",
                TextAlign::Center => "center",
                TextAlign::Right => "right",
            }
            .to_owned();
        }
        if let Some(max_width) = self.max_width {
            config.render.max_width = max_width;
        }
        if self.simple {
            config.render.composition = "simple".to_owned();
        }
        if let Some(width) = self.width {
            config.canvas.width = width;
        }
        if let Some(height) = self.height {
            config.canvas.height = height;
        }
    }

    /// Load the config named by `--config`, or the default one, and apply
    /// the command line on top.
    pub fn resolve_config(&self) -> Result<Config, String> {
        let mut config = match &self.config {
            Some(path) => Config::try_load_from(path)?,
            None => Config::load(),
        };
        self.apply(&mut config);
        Ok(config)
    }
}

/// Ncode bytes of `text` as space-separated uppercase hex.
pub fn encode_hex(text: &str) -> String {
    ncode::encode_str(text.as_bytes())
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_font(path: Option<&Path>) -> Result<Option<Vec<u8>>, String> {
    let Some(path) = path else {
        return Ok(None);
    };
    let data = std::fs::read(path).map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    log::debug!("font: read {} bytes from {}", data.len(), path.display());
    Ok(Some(data))
}

fn table<'a>(data: Option<&'a [u8]>, path: Option<&Path>) -> Result<Option<FontTable<'a>>, String> {
    let Some(data) = data else {
        return Ok(None);
    };
    FontTable::new(data).map(Some).map_err(|e| match path {
        Some(p) => format!("{}: {e}", p.display()),
        None => e.to_string(),
    })
}

/// Draw `text` onto a fresh canvas sized and styled by `config`.
pub fn render(config: &Config, text: &str) -> Result<Canvas, String> {
    let ascii_path = config.font.ascii.as_deref();
    let ncode_path = config.font.ncode.as_deref();
    if ascii_path.is_none() && ncode_path.is_none() {
        return Err("no font configured; pass --ascii-font and/or --ncode-font".to_owned());
    }
    let ascii_data = read_font(ascii_path)?;
    let ncode_data = read_font(ncode_path)?;
    let fonts = FontSet::new(
        table(ascii_data.as_deref(), ascii_path)?,
        table(ncode_data.as_deref(), ncode_path)?,
    )
    .with_composition(config.render.composition());
    log::debug!("render: {:?} composition", fonts.composition);

    let mut canvas = Canvas::new(config.canvas.width, config.canvas.height);
    let align = config.render.align();
    let width = config.canvas.width as i32;
    let x = match align {
        TextAlign::Left => 0,
        TextAlign::Center => width / 2,
        TextAlign::Right => width,
    };
    match config.render.wrap_width() {
        Some(max_width) => {
            let lines = fonts.draw_string_wrapped(&mut canvas, x, 0, align, max_width, text.as_bytes());
            log::info!("render: {lines} lines at max width {max_width}");
        }
        None => {
            let drawn = fonts.draw_string(&mut canvas, x, 0, align, text.as_bytes());
            log::info!("render: single line {drawn}px wide");
        }
    }
    log::debug!("render: {} pixels lit", canvas.lit_count());
    Ok(canvas)
}

/// Produce the program's stdout for `args` and `text`.
pub fn run(args: &Args, config: &Config, text: &str) -> Result<String, String> {
    if args.encode {
        let mut out = encode_hex(text);
        out.push('\n');
        return Ok(out);
    }
    let canvas = render(config, text)?;
    let (on, off) = (config.canvas.on, config.canvas.off);
    Ok(if args.pbm {
        canvas.to_pbm()
    } else if args.trim {
        canvas.to_text_trimmed(on, off)
    } else {
        canvas.to_text(on, off)
    })
}
