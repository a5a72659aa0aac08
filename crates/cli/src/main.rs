mod settings;

use std::collections::HashMap;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::Parser;

use vigil_core::capture::domain::camera_feed::{CameraFeed, PermissionStatus};
use vigil_core::capture::infrastructure::image_sequence_feed::ImageSequenceFeed;
use vigil_core::capture::infrastructure::synthetic_feed::SyntheticFeed;
use vigil_core::classify::domain::classifier::AwarenessClassifier;
use vigil_core::classify::infrastructure::onnx_awareness_classifier::OnnxAwarenessClassifier;
use vigil_core::classify::infrastructure::scripted_classifier::ScriptedClassifier;
use vigil_core::detection::domain::face_localizer::FaceLocalizer;
use vigil_core::detection::infrastructure::onnx_blazeface_localizer::OnnxBlazefaceLocalizer;
use vigil_core::detection::infrastructure::replay_localizer::ReplayLocalizer;
use vigil_core::monitor::awareness_monitor::{
    AwarenessMonitor, ClassifierLoader, LocalizerLoader, MonitorConfig, MonitorEvent,
    MonitorSummary,
};
use vigil_core::monitor::overlay::PreviewViewport;
use vigil_core::shared::camera_metadata::CameraFacing;
use vigil_core::shared::constants::{CLASSIFIER_MODEL_NAME, LOCALIZER_MODEL_NAME};
use vigil_core::shared::face_detection::FaceDetection;
use vigil_core::shared::model_locator;

use settings::{Facing, Settings};

/// Awareness monitoring over a camera-style frame stream.
#[derive(Parser)]
#[command(name = "vigil")]
struct Cli {
    /// Directory of image frames standing in for camera capture.
    frames: Option<PathBuf>,

    /// Run a demo over N generated frames with scripted detection and
    /// classification (no model files needed).
    #[arg(long)]
    synthetic: Option<usize>,

    /// Explicit path to the face localizer ONNX model.
    #[arg(long)]
    localizer_model: Option<PathBuf>,

    /// Explicit path to the awareness classifier ONNX model.
    #[arg(long)]
    classifier_model: Option<PathBuf>,

    /// Directory holding the bundled ONNX models.
    #[arg(long)]
    models_dir: Option<PathBuf>,

    /// Face detection confidence threshold (0.0-1.0).
    #[arg(long)]
    confidence: Option<f32>,

    /// Run inference every Nth frame (1 = every frame).
    #[arg(long)]
    interval: Option<usize>,

    /// Rolling window capacity; a decision flushes on the entry after this.
    #[arg(long)]
    window: Option<usize>,

    /// Capture width frames are resized to.
    #[arg(long)]
    width: Option<u32>,

    /// Capture height frames are resized to.
    #[arg(long)]
    height: Option<u32>,

    /// Nominal capture frame rate.
    #[arg(long)]
    fps: Option<f64>,

    /// Camera facing: front or back.
    #[arg(long)]
    facing: Option<String>,

    /// Force overlay mirroring on or off (default: mirror front cameras).
    #[arg(long)]
    mirror: Option<bool>,

    /// Preview viewport as x,y,width,height in screen points.
    #[arg(long, value_delimiter = ',')]
    viewport: Option<Vec<f32>>,

    /// Persist the resolved settings as new defaults.
    #[arg(long)]
    save_settings: bool,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = resolve_settings(&cli)?;
    validate(&cli, &resolved)?;
    if cli.save_settings {
        resolved.save();
        log::info!("settings saved");
    }

    let facing = resolved.facing.to_camera();
    let feed = build_feed(&cli, &resolved, facing);
    let (localizer_loader, classifier_loader) = build_loaders(&cli, &resolved)?;

    let config = MonitorConfig {
        throttle_interval: resolved.interval,
        window_capacity: resolved.window,
        viewport: parse_viewport(&cli.viewport),
        mirror: cli.mirror,
    };
    let monitor = AwarenessMonitor::new(feed, localizer_loader, classifier_loader, config)?;

    let (events, _cancelled) = monitor.spawn();
    let mut finished: Option<MonitorSummary> = None;
    let mut last_error: Option<String> = None;
    for event in events {
        match event {
            MonitorEvent::PhaseChanged(phase) => log::info!("phase: {phase}"),
            MonitorEvent::FrameProcessed {
                frame_index,
                overlays,
            } => {
                for overlay in &overlays {
                    println!(
                        "frame {frame_index}: [{:.1}, {:.1}, {:.1} x {:.1}] {}",
                        overlay.rect.left,
                        overlay.rect.top,
                        overlay.rect.width,
                        overlay.rect.height,
                        overlay.caption,
                    );
                }
            }
            MonitorEvent::Smoothed(result) => {
                println!(
                    "awareness level {} (p = {:.4})",
                    result.level, result.probability
                );
            }
            MonitorEvent::Error(msg) => {
                log::warn!("{msg}");
                last_error = Some(msg);
            }
            MonitorEvent::Finished(summary) => finished = Some(summary),
        }
    }

    match finished {
        Some(summary) => {
            print_summary(&summary);
            Ok(())
        }
        // No Finished event means the run never got past startup.
        None => Err(last_error
            .unwrap_or_else(|| "monitor stopped before running".to_string())
            .into()),
    }
}

fn resolve_settings(cli: &Cli) -> Result<Settings, Box<dyn std::error::Error>> {
    let saved = Settings::load();
    let facing = match cli.facing.as_deref() {
        Some("front") => Facing::Front,
        Some("back") => Facing::Back,
        Some(other) => {
            return Err(format!("Facing must be 'front' or 'back', got '{other}'").into())
        }
        None => saved.facing,
    };
    Ok(Settings {
        interval: cli.interval.unwrap_or(saved.interval),
        window: cli.window.unwrap_or(saved.window),
        capture_width: cli.width.unwrap_or(saved.capture_width),
        capture_height: cli.height.unwrap_or(saved.capture_height),
        fps: cli.fps.unwrap_or(saved.fps),
        facing,
        confidence: cli.confidence.unwrap_or(saved.confidence),
    })
}

fn validate(cli: &Cli, resolved: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    match (&cli.frames, cli.synthetic) {
        (Some(_), Some(_)) => {
            return Err("A frames directory and --synthetic are mutually exclusive".into())
        }
        (None, None) => return Err("A frames directory or --synthetic is required".into()),
        (Some(dir), None) if !dir.is_dir() => {
            return Err(format!("Frames directory not found: {}", dir.display()).into())
        }
        _ => {}
    }
    if resolved.interval == 0 {
        return Err("Interval must be at least 1".into());
    }
    if resolved.window == 0 {
        return Err("Window capacity must be at least 1".into());
    }
    if resolved.capture_width == 0 || resolved.capture_height == 0 {
        return Err("Capture geometry must be positive".into());
    }
    if !(0.0..=1.0).contains(&resolved.confidence) {
        return Err(format!(
            "Confidence must be between 0.0 and 1.0, got {}",
            resolved.confidence
        )
        .into());
    }
    if let Some(values) = &cli.viewport {
        if values.len() != 4 || values[2] <= 0.0 || values[3] <= 0.0 {
            return Err("Viewport must be x,y,width,height with positive extent".into());
        }
    }
    Ok(())
}

fn build_feed(cli: &Cli, resolved: &Settings, facing: CameraFacing) -> Box<dyn CameraFeed> {
    if let Some(count) = cli.synthetic {
        Box::new(SyntheticFeed::new(
            count,
            resolved.capture_width,
            resolved.capture_height,
            facing,
            PermissionStatus::Granted,
        ))
    } else {
        Box::new(ImageSequenceFeed::new(
            cli.frames.clone().unwrap_or_default(),
            resolved.capture_width,
            resolved.capture_height,
            resolved.fps,
            facing,
        ))
    }
}

fn build_loaders(
    cli: &Cli,
    resolved: &Settings,
) -> Result<(LocalizerLoader, ClassifierLoader), Box<dyn std::error::Error>> {
    if let Some(count) = cli.synthetic {
        return Ok(scripted_loaders(
            count,
            resolved.capture_width,
            resolved.capture_height,
        ));
    }

    // Resolve both model files up front so a missing install fails the
    // startup rather than silently degrading to preview-only.
    let bundled = cli
        .models_dir
        .clone()
        .or_else(model_locator::default_bundled_dir);
    let localizer_path = model_locator::locate(
        LOCALIZER_MODEL_NAME,
        cli.localizer_model.as_deref(),
        bundled.as_deref(),
    )?;
    let classifier_path = model_locator::locate(
        CLASSIFIER_MODEL_NAME,
        cli.classifier_model.as_deref(),
        bundled.as_deref(),
    )?;
    log::info!("localizer model: {}", localizer_path.display());
    log::info!("classifier model: {}", classifier_path.display());

    let confidence = resolved.confidence;
    let localizer: LocalizerLoader = Box::new(move || {
        Ok(
            Box::new(OnnxBlazefaceLocalizer::new(&localizer_path, confidence)?)
                as Box<dyn FaceLocalizer>,
        )
    });
    let classifier: ClassifierLoader = Box::new(move || {
        Ok(Box::new(OnnxAwarenessClassifier::new(&classifier_path)?)
            as Box<dyn AwarenessClassifier>)
    });
    Ok((localizer, classifier))
}

/// Scripted collaborators for the synthetic demo: a face box drifting
/// across the frame and a cycling score script that favours level 10.
fn scripted_loaders(
    frame_count: usize,
    width: u32,
    height: u32,
) -> (LocalizerLoader, ClassifierLoader) {
    let (w, h) = (width as f32, height as f32);
    let script: HashMap<usize, Vec<FaceDetection>> = (0..frame_count)
        .map(|index| {
            let drift = (index as f32 / frame_count.max(1) as f32) * w * 0.25;
            let detection = FaceDetection::new(
                (w * 0.25 + drift, h * 0.25),
                (w * 0.6 + drift, h * 0.75),
                0.93,
            );
            (index, vec![detection])
        })
        .collect();
    let script = Arc::new(script);
    let localizer: LocalizerLoader =
        Box::new(move || Ok(Box::new(ReplayLocalizer::new(script)) as Box<dyn FaceLocalizer>));

    let classifier: ClassifierLoader = Box::new(|| {
        Ok(Box::new(ScriptedClassifier::cycle(vec![
            [0.05, 0.85, 0.10],
            [0.10, 0.75, 0.15],
            [0.20, 0.10, 0.70],
            [0.05, 0.80, 0.15],
            [0.15, 0.70, 0.15],
        ])) as Box<dyn AwarenessClassifier>)
    });
    (localizer, classifier)
}

fn parse_viewport(values: &Option<Vec<f32>>) -> PreviewViewport {
    match values.as_deref() {
        Some([x, y, width, height]) => PreviewViewport {
            x: *x,
            y: *y,
            width: *width,
            height: *height,
        },
        _ => PreviewViewport::default(),
    }
}

fn print_summary(summary: &MonitorSummary) {
    log::info!(
        "done: {} frames seen, {} inferred, {} faces classified, {} decisions, {} flushes without majority",
        summary.frames_seen,
        summary.frames_inferred,
        summary.faces_classified,
        summary.smoothed_results,
        summary.no_majority_flushes,
    );
}
