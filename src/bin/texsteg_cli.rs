//! texsteg CLI: headless encode, decode, and capacity query for scripts.
//! Build with: cargo build --release --bin texsteg-cli

use base64::Engine;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

fn usage() -> &'static str {
    r#"texsteg-cli — content-adaptive image steganography CLI

Usage:
  texsteg-cli encode <cover.png> -o <out.png> --secret <key> --payload <string|@file> [--payload-base64]
  texsteg-cli decode <stego.png> --secret <key> [--base64]
  texsteg-cli capacity <cover.png>

Encode:
  --payload <string>     Payload as a UTF-8 string
  --payload <@path>      Payload read from a file
  --payload-base64 <b64> Payload as a base64 string
  -o, --output <path>    Output PNG path (required)
  --secret <key>         Shared secret (required)

Decode:
  --secret <key>         Shared secret (required)
  --base64               Print recovered payload as base64 instead of raw bytes

Capacity:
  Prints the maximum payload size in bytes for the given cover image.
"#
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("{}", usage());
        std::process::exit(1);
    }
    let sub = &args[1];
    let result = match sub.as_str() {
        "encode" => run_encode(&args[2..]),
        "decode" => run_decode(&args[2..]),
        "capacity" => run_capacity(&args[2..]),
        _ => {
            eprintln!("{}", usage());
            std::process::exit(1);
        }
    };
    if let Err(e) = result {
        eprintln!("{sub} error: {e}");
        std::process::exit(1);
    }
}

fn load_cover(path: &str) -> Result<image::RgbaImage, String> {
    image::open(Path::new(path))
        .map_err(|e| e.to_string())
        .map(|img| img.to_rgba8())
}

fn run_encode(args: &[String]) -> Result<(), String> {
    let mut cover: Option<&str> = None;
    let mut output: Option<&str> = None;
    let mut secret: Option<&str> = None;
    let mut payload_str: Option<String> = None;
    let mut payload_base64: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        let a = &args[i];
        if a == "-o" || a == "--output" {
            i += 1;
            output = Some(args.get(i).ok_or("missing value for -o/--output")?);
        } else if a == "--secret" {
            i += 1;
            secret = Some(args.get(i).ok_or("missing value for --secret")?);
        } else if a == "--payload" {
            i += 1;
            let v = args.get(i).ok_or("missing value for --payload")?;
            if let Some(path) = v.strip_prefix('@') {
                payload_str = Some(fs::read_to_string(path).map_err(|e| e.to_string())?);
            } else {
                payload_str = Some(v.clone());
            }
        } else if a == "--payload-base64" {
            i += 1;
            payload_base64 = Some(args.get(i).ok_or("missing value for --payload-base64")?.clone());
        } else if !a.starts_with('-') && cover.is_none() {
            cover = Some(a);
        }
        i += 1;
    }

    let cover_path = cover.ok_or("encode requires <cover.png>")?;
    let output_path = output.ok_or("encode requires -o/--output <out.png>")?;
    let secret = secret.ok_or("encode requires --secret <key>")?;

    let payload_bytes: Vec<u8> = if let Some(b64) = payload_base64 {
        base64::engine::general_purpose::STANDARD
            .decode(b64.trim())
            .map_err(|e| e.to_string())?
    } else if let Some(s) = payload_str {
        s.into_bytes()
    } else {
        return Err("encode requires --payload <string|@file> or --payload-base64 <b64>".to_string());
    };

    let cover_img = load_cover(cover_path)?;
    let stego = texsteg::encode_image(&payload_bytes, &cover_img, secret.as_bytes())
        .map_err(|e| e.to_string())?;
    stego.save(output_path).map_err(|e| e.to_string())?;
    eprintln!("Wrote {}", output_path);
    Ok(())
}

fn run_decode(args: &[String]) -> Result<(), String> {
    let mut stego_path: Option<&str> = None;
    let mut secret: Option<&str> = None;
    let mut as_base64 = false;

    let mut i = 0;
    while i < args.len() {
        let a = &args[i];
        if a == "--secret" {
            i += 1;
            secret = Some(args.get(i).ok_or("missing value for --secret")?);
        } else if a == "--base64" {
            as_base64 = true;
        } else if !a.starts_with('-') && stego_path.is_none() {
            stego_path = Some(a);
        }
        i += 1;
    }

    let path = stego_path.ok_or("decode requires <stego.png>")?;
    let secret = secret.ok_or("decode requires --secret <key>")?;
    let stego_img = load_cover(path)?;
    let payload = texsteg::decode_image(&stego_img, secret.as_bytes()).map_err(|e| e.to_string())?;

    if as_base64 {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&payload);
        io::stdout()
            .write_all(encoded.as_bytes())
            .map_err(|e| e.to_string())?;
    } else {
        io::stdout().write_all(&payload).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn run_capacity(args: &[String]) -> Result<(), String> {
    let path = args.first().ok_or("capacity requires <cover.png>")?;
    let cover_img = load_cover(path)?;
    let max = texsteg::max_capacity(cover_img.width(), cover_img.height());
    println!("{max}");
    Ok(())
}
