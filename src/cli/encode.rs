use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use ccitt_g4::{
    ascii_art,
    g42d::{encode_with, EncodeOptions, ModeCounts, StreamEncoder},
    Color,
};
use color_eyre::eyre::{self, eyre};
use log::info;
use prettytable::{format, row, Cell, Row, Table};

use super::opt::Options;

/// Load an image as 8-bit gray values, one byte per pixel
fn load_gray(path: &Path, invert: bool) -> eyre::Result<(usize, usize, Vec<u8>)> {
    let image = image::open(path)?.to_luma8();
    let (width, height) = image.dimensions();
    let mut gray = image.into_raw();
    if invert {
        for value in &mut gray {
            *value = !*value;
        }
    }
    Ok((width as usize, height as usize, gray))
}

fn encode_stream(
    gray: &[u8],
    width: usize,
    options: EncodeOptions,
    out_path: &Path,
) -> eyre::Result<ModeCounts> {
    let file = File::create(out_path)?;
    let mut encoder = StreamEncoder::new(BufWriter::new(file), width, options)?;
    for row in gray.chunks(width) {
        encoder.write_all(row)?;
    }
    let counts = encoder.counts();
    let mut writer = encoder.finish()?;
    writer.flush()?;
    Ok(counts)
}

/// Print the mode statistics
pub fn print_stats(counts: &ModeCounts) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["mode", "count"]);

    let mut add = |name: &str, count: usize| {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&format!("{:6}", count)),
        ]));
    };
    add("P", counts.pass);
    add("H", counts.horizontal);
    for (name, distance) in &[
        ("VL3", -3),
        ("VL2", -2),
        ("VL1", -1),
        ("V0", 0),
        ("VR1", 1),
        ("VR2", 2),
        ("VR3", 3),
    ] {
        add(name, counts.vertical_at(*distance));
    }
    add("total", counts.total());

    table.printstd();
}

/// Encode the image given in the options
pub fn process_image(opt: &Options) -> eyre::Result<()> {
    let config = opt.config()?;
    let options = config.options();
    let (width, height, gray) = load_gray(&opt.file, config.invert())?;
    info!(
        "Loaded {}x{} image from '{}'",
        width,
        height,
        opt.file.display()
    );

    let out_path = opt.out_path();
    if out_path == opt.file {
        return Err(eyre!("Refusing to overwrite the input file"));
    }

    let pixels: Vec<Color> = gray.iter().copied().map(Color::from_gray).collect();
    if opt.print {
        let mut out = String::new();
        ascii_art(&mut out, &pixels, width)?;
        print!("{}", out);
    }

    let counts = if opt.stream {
        encode_stream(&gray, width, options, &out_path)?
    } else {
        let encoded = encode_with(width, height, &pixels, options)?;
        std::fs::write(&out_path, &encoded.data)?;
        encoded.counts
    };
    info!("Saved group 4 image as '{}'", out_path.display());

    if opt.stats {
        print_stats(&counts);
    }
    Ok(())
}
