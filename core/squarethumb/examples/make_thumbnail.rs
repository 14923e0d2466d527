//! Generate a square thumbnail from an image file.
//!
//! Usage:
//!   cargo run --example make_thumbnail -- photo.jpg [side]

use squarethumb::ThumbnailLoader;

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| {
        eprintln!("usage: make_thumbnail <image> [side]");
        std::process::exit(2);
    });
    let side: u32 = args
        .next()
        .map(|s| s.parse().expect("side must be an integer"))
        .unwrap_or(128);

    let bytes = std::fs::read(&path).expect("failed to read input");
    let thumb = ThumbnailLoader::new(bytes)
        .expect("unrecognized image format")
        .fit_within(side * 2, side * 2)
        .side_length(side)
        .load()
        .expect("failed to load thumbnail");

    println!(
        "source {}x{}, decoded /{}, output {}x{}",
        thumb.source.width,
        thumb.source.height,
        thumb.sample_factor,
        thumb.side(),
        thumb.side()
    );

    let stem = std::path::Path::new(&path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("thumbnail");
    let output = format!("{stem}_thumb.png");
    thumb.image.save(&output).expect("failed to save output");
    println!("wrote {output}");
}
