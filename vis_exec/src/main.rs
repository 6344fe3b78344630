//! # Vision Executable
//!
//! This executable runs the path and sign detectors on frames and passes their results on to the
//! state machine.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

mod params;

// -----------------------------------------------------------------------------------------------
// IMPORTS
// -----------------------------------------------------------------------------------------------

use std::path::{Path, PathBuf};

use color_eyre::{eyre::WrapErr, Result};
use comms_if::eqpt::sign::BoundingBox;
use log::{info, warn};
use structopt::StructOpt;

use params::VisExecParams;
use util::{
    archive::Archiver,
    logger::{logger_init, LevelFilter},
    module::Stage,
    session::Session,
};
use vis_lib::{
    mask::Mask,
    path_det::{PathDet, StatusReport},
    sign_det::{self, SignDet},
};

// -----------------------------------------------------------------------------------------------
// CLI
// -----------------------------------------------------------------------------------------------

#[derive(Debug, StructOpt)]
#[structopt(name = "vis_exec", about = "Road path and sign detection")]
struct Opts {
    /// Parameter file, relative to the params directory
    #[structopt(long, default_value = "vis_exec.toml")]
    params: String,

    /// Minimum log level (info, debug or trace)
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, StructOpt)]
enum Cmd {
    /// Estimate the heading from binarised road boundary masks
    Path {
        /// Also render and save the debug overlay of each mask
        #[structopt(long)]
        overlay: bool,

        /// Mask images, non-zero pixels mark road boundaries
        #[structopt(parse(from_os_str), required = true)]
        masks: Vec<PathBuf>,
    },

    /// Classify a road sign image
    Sign {
        /// Colour image of the sign
        #[structopt(parse(from_os_str))]
        image: PathBuf,

        /// Bounding box of the sign in the camera view: x0 y0 w h
        #[structopt(long, number_of_values = 4, required = true)]
        bb: Vec<u32>,
    },
}

// -----------------------------------------------------------------------------------------------
// MAIN
// -----------------------------------------------------------------------------------------------

fn main() -> Result<()> {
    // ---- EARLY INITIALISATION ----

    color_eyre::install()?;

    let opts = Opts::from_args();

    // Initialise session
    let session = Session::new("vis_exec", "sessions")
        .wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(opts.log_level, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Vision Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    info!("Initialising...");

    // ---- LOAD PARAMETERS ----

    let params: VisExecParams = util::params::load(&opts.params)
        .wrap_err("Could not load the vision executable parameters")?;

    info!("Parameters loaded");

    // ---- INIT DETECTORS ----

    let path_det = PathDet::init(params.path_det)
        .wrap_err("Failed to initialise the path detector")?;
    info!("Path detector initialised: {:?}", path_det.params());

    let sign_det = SignDet::init(params.sign_det)
        .wrap_err("Failed to initialise the sign detector")?;
    info!("Sign detector initialised");

    // ---- PROCESS ----

    match opts.cmd {
        Cmd::Path { overlay, masks } => process_masks(&session, &path_det, &masks, overlay),
        Cmd::Sign { image, bb } => process_sign(&session, &sign_det, &image, &bb),
    }
}

// -----------------------------------------------------------------------------------------------
// FUNCTIONS
// -----------------------------------------------------------------------------------------------

/// Run the path detector on each mask, saving and archiving the results.
fn process_masks(
    session: &Session,
    path_det: &PathDet,
    masks: &[PathBuf],
    overlay: bool,
) -> Result<()> {
    let mut archiver = Archiver::from_path(session, "path_det.csv")
        .wrap_err("Failed to create the path detector archive")?;

    for mask_path in masks {
        let name = frame_name(mask_path);

        let mask = Mask::open(mask_path)
            .wrap_err_with(|| format!("Failed to load mask {:?}", mask_path))?;

        let (path_dict, report) = path_det
            .proc(&mask)
            .wrap_err_with(|| format!("Path detection failed on {:?}", mask_path))?;

        if report.contacts.left.is_fallback || report.contacts.right.is_fallback {
            warn!(
                "{}: no boundary found on the{}{} side, fallback position used",
                name,
                if report.contacts.left.is_fallback { " left" } else { "" },
                if report.contacts.right.is_fallback { " right" } else { "" },
            );
        }

        info!("{}: {}", name, path_dict.to_json()?);

        session
            .save_json(format!("path_det/{}.json", name), &path_dict)
            .wrap_err("Failed to save the path dictionary")?;

        archiver
            .serialise(report.to_arch_record(&name))
            .wrap_err("Failed to archive the path detector report")?;

        if overlay {
            save_overlay(session, &report, &name)?;
        }
    }

    info!("Processed {} mask(s)", masks.len());

    Ok(())
}

/// Render the debug overlay for a detection and save it into the session.
#[cfg(feature = "overlay")]
fn save_overlay(session: &Session, report: &StatusReport, name: &str) -> Result<()> {
    let dir = session.session_root.join("overlay");
    std::fs::create_dir_all(&dir)
        .wrap_err("Failed to create the overlay directory")?;

    vis_lib::overlay::render(report)
        .save(dir.join(format!("{}.png", name)))
        .wrap_err("Failed to save the overlay")
}

#[cfg(not(feature = "overlay"))]
fn save_overlay(_session: &Session, _report: &StatusReport, name: &str) -> Result<()> {
    warn!("{}: built without the overlay feature, no overlay saved", name);
    Ok(())
}

/// Run the sign detector on a single sign image.
fn process_sign(
    session: &Session,
    sign_det: &SignDet,
    image_path: &Path,
    bb: &[u32],
) -> Result<()> {
    let bb = match *bb {
        [x0, y0, w, h] => BoundingBox { x0, y0, w, h },
        _ => color_eyre::eyre::bail!("Expected 4 bounding box values, got {}", bb.len()),
    };

    let image = image::open(image_path)
        .wrap_err_with(|| format!("Failed to load sign image {:?}", image_path))?
        .to_rgb8();

    let (sign_dict, report) = sign_det
        .proc(&sign_det::InputData { image, bb })
        .wrap_err("Sign detection failed")?;

    info!("{}: {:?} ({:?})", frame_name(image_path), sign_dict, report);

    session
        .save_json(format!("sign_det/{}.json", frame_name(image_path)), &sign_dict)
        .wrap_err("Failed to save the sign dictionary")?;

    Ok(())
}

/// Name of a frame, the file stem of its path.
fn frame_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("frame"))
}
