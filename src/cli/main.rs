use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use shutter_sim::config::Config;
use shutter_sim::exposure::{ColorFilter, ExposureModel, ExposureSettings};
use shutter_sim::gallery::{CaptureSettings, Gallery, Photo};

#[derive(Parser, Debug)]
#[command(
    name = "shutter-sim",
    version,
    about = "Interactive camera exposure simulator — derive EV, meter reading, brightness, and zoom from capture settings"
)]
struct Cli {
    /// Initial capture settings as FIELD=VALUE pairs
    /// (iso, aperture, shutter, focal, filter)
    #[arg(value_name = "FIELD=VALUE")]
    settings: Vec<String>,

    /// Path to config file (default: config.json next to binary)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initialize a default config.json and exit
    #[arg(long)]
    init: bool,

    /// Output readouts as JSON
    #[arg(long)]
    json: bool,

    /// Start the interactive shell after applying the settings
    #[arg(short, long)]
    interactive: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Handle --init
    if cli.init {
        let config = Config::default();
        let path = cli.config.as_deref();
        config.save(path)?;
        let save_path = match path {
            Some(p) => p.to_path_buf(),
            None => Config::config_path()?,
        };
        println!("Default config written to {}", save_path.display());
        return Ok(());
    }

    // Load config
    let mut config = Config::load(cli.config.as_deref())?;

    // Override output mode from CLI flag
    if cli.json {
        config.output.json = true;
    }

    // Apply positional FIELD=VALUE assignments on top of the startup settings
    let mut settings = config.startup.to_settings();
    for assignment in &cli.settings {
        apply_assignment(&mut settings, assignment)?;
    }

    let mut camera = ExposureModel::with_settings(settings)
        .context("Invalid startup settings")?;

    print_readout(&camera, config.output.json)?;

    if cli.interactive {
        let mut gallery = Gallery::new();
        run_shell(&mut camera, &mut gallery, config.output.json)?;
    }

    Ok(())
}

/// Apply one `field=value` assignment to the settings record.
fn apply_assignment(settings: &mut ExposureSettings, assignment: &str) -> Result<()> {
    let (field, value) = assignment
        .split_once('=')
        .with_context(|| format!("Expected FIELD=VALUE, got '{assignment}'"))?;

    if field.eq_ignore_ascii_case("filter") {
        settings.filter = ColorFilter::from_name(value)
            .with_context(|| format!("Unknown filter '{value}' (standard, sepia, mono, warm, cool)"))?;
        return Ok(());
    }

    let number: f64 = value
        .parse()
        .with_context(|| format!("'{value}' is not a number for field '{field}'"))?;
    match field.to_lowercase().as_str() {
        "iso" => settings.iso = number,
        "aperture" => settings.aperture = number,
        "shutter" | "shutter_speed" => settings.shutter_speed = number,
        "focal" | "focal_length" => settings.focal_length = number,
        _ => anyhow::bail!("Unknown field '{field}' (iso, aperture, shutter, focal, filter)"),
    }
    Ok(())
}

/// Print the current settings and the derived readout.
fn print_readout(camera: &ExposureModel, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({
            "settings": camera.settings(),
            "readout": camera.readout(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let settings = camera.settings();
    let readout = camera.readout();
    println!(
        "ISO {}  {}  {}  {}mm  filter: {}",
        settings.iso,
        settings.aperture_label(),
        settings.shutter_label(),
        settings.focal_length,
        settings.filter.name(),
    );
    println!(
        "EV {:.2}   meter {:+.2} stops   brightness ×{:.2}   zoom ×{:.2}",
        readout.exposure_value, readout.meter_reading, readout.brightness, readout.zoom,
    );
    Ok(())
}

const SHELL_HELP: &str = "\
Commands:
  iso N            set ISO sensitivity
  aperture N       set f-number
  shutter N        set shutter speed denominator (125 = 1/125s, 0.5 = 2s)
  focal N          set focal length in mm
  filter NAME      set color filter (standard, sepia, mono, warm, cool)
  show             print the current settings and readout
  reset            restore the default settings
  capture [URL]    snapshot the current settings into the gallery
  gallery          list captured photos (active marked with *)
  select ID        open a photo for detail viewing (no ID to deselect)
  remove ID        remove a photo from the gallery
  clear            empty the gallery
  help             show this help
  quit             exit";

/// Read-eval loop driving the model and the gallery from stdin.
fn run_shell(camera: &mut ExposureModel, gallery: &mut Gallery, json: bool) -> Result<()> {
    println!("Interactive shell — 'help' lists commands, 'quit' exits.");
    let stdin = io::stdin();
    let mut shot_counter = 0u32;

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let arg = parts.next();

        let outcome = match command.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => {
                println!("{SHELL_HELP}");
                Ok(())
            }
            "show" => print_readout(camera, json),
            "reset" => {
                camera.reset();
                print_readout(camera, json)
            }
            "iso" => set_numeric(arg, "iso", |v| camera.set_iso(v)).and_then(|()| print_readout(camera, json)),
            "aperture" => {
                set_numeric(arg, "aperture", |v| camera.set_aperture(v))
                    .and_then(|()| print_readout(camera, json))
            }
            "shutter" => {
                set_numeric(arg, "shutter", |v| camera.set_shutter_speed(v))
                    .and_then(|()| print_readout(camera, json))
            }
            "focal" => {
                set_numeric(arg, "focal", |v| camera.set_focal_length(v))
                    .and_then(|()| print_readout(camera, json))
            }
            "filter" => set_filter(camera, arg).and_then(|()| print_readout(camera, json)),
            "capture" => {
                shot_counter += 1;
                capture(camera, gallery, shot_counter, arg)
            }
            "gallery" => list_gallery(gallery, json),
            "select" => {
                gallery.set_active(arg);
                match gallery.active_photo() {
                    Some(photo) => println!("Active: {} ({})", photo.id, photo.url),
                    None => println!("No active photo"),
                }
                Ok(())
            }
            "remove" => match arg {
                Some(id) => {
                    if gallery.remove_photo(id) {
                        println!("Removed {id}");
                    } else {
                        println!("No photo with id {id}");
                    }
                    Ok(())
                }
                None => Err(anyhow::anyhow!("Usage: remove ID")),
            },
            "clear" => {
                gallery.clear();
                println!("Gallery cleared");
                Ok(())
            }
            other => Err(anyhow::anyhow!("Unknown command '{other}' — try 'help'")),
        };

        if let Err(err) = outcome {
            log::error!("{err:#}");
        }
    }

    Ok(())
}

/// Parse a numeric shell argument and feed it to the given setter.
fn set_numeric(
    arg: Option<&str>,
    field: &str,
    set: impl FnOnce(f64) -> std::result::Result<(), shutter_sim::SettingError>,
) -> Result<()> {
    let raw = arg.with_context(|| format!("Usage: {field} N"))?;
    let value: f64 = raw
        .parse()
        .with_context(|| format!("'{raw}' is not a number"))?;
    set(value)?;
    Ok(())
}

fn set_filter(camera: &mut ExposureModel, arg: Option<&str>) -> Result<()> {
    let name = arg.context("Usage: filter NAME (standard, sepia, mono, warm, cool)")?;
    let filter = ColorFilter::from_name(name)
        .with_context(|| format!("Unknown filter '{name}' (standard, sepia, mono, warm, cool)"))?;
    camera.set_filter(filter);
    Ok(())
}

/// Snapshot the current settings into the gallery as a new photo.
fn capture(
    camera: &ExposureModel,
    gallery: &mut Gallery,
    shot_number: u32,
    url: Option<&str>,
) -> Result<()> {
    let id = format!("shot-{shot_number}");
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the Unix epoch")?
        .as_millis() as u64;

    let photo = Photo {
        id: id.clone(),
        url: url
            .map(str::to_owned)
            .unwrap_or_else(|| format!("file:///captures/{id}.png")),
        timestamp,
        settings: CaptureSettings::from(camera.settings()),
    };
    gallery.add_photo(photo);

    let settings = camera.settings();
    println!(
        "Captured {id} at ISO {} {} {}",
        settings.iso,
        settings.aperture_label(),
        settings.shutter_label(),
    );
    Ok(())
}

/// List the gallery, most recent first, marking the active photo.
fn list_gallery(gallery: &Gallery, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(gallery.photos())?);
        return Ok(());
    }

    if gallery.is_empty() {
        println!("Gallery is empty");
        return Ok(());
    }
    let active_id = gallery.active_photo().map(|p| p.id.as_str());
    for photo in gallery.photos() {
        let marker = if Some(photo.id.as_str()) == active_id { "*" } else { " " };
        println!(
            "{marker} {}  ISO {} f/{} shutter {}  {}",
            photo.id,
            photo.settings.iso,
            photo.settings.aperture,
            photo.settings.shutter_speed,
            photo.url,
        );
    }
    Ok(())
}
