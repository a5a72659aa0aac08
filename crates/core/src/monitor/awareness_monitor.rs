use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};

use crate::capture::domain::camera_feed::{CameraFeed, PermissionStatus};
use crate::classify::domain::classifier::{top_prediction, AwarenessClassifier};
use crate::classify::domain::rolling_smoother::{FlushOutcome, RollingSmoother, SmoothedResult};
use crate::detection::domain::crop_aligner::CropAligner;
use crate::detection::domain::face_localizer::FaceLocalizer;
use crate::shared::camera_metadata::CameraFacing;
use crate::shared::constants::{
    CLASSIFIER_INPUT_SIDE, DEFAULT_THROTTLE_INTERVAL, DEFAULT_WINDOW_CAPACITY,
};
use crate::shared::frame::Frame;

use super::frame_throttle::FrameThrottle;
use super::overlay::{FaceOverlay, OverlayMapper, PreviewViewport};
use super::phase::MonitorPhase;

/// Produces the face localizer on the loading thread.
pub type LocalizerLoader =
    Box<dyn FnOnce() -> Result<Box<dyn FaceLocalizer>, Box<dyn std::error::Error>> + Send>;

/// Produces the awareness classifier on the loading thread.
pub type ClassifierLoader =
    Box<dyn FnOnce() -> Result<Box<dyn AwarenessClassifier>, Box<dyn std::error::Error>> + Send>;

/// Tuning for one monitor run.
pub struct MonitorConfig {
    /// Run inference on every Nth frame.
    pub throttle_interval: usize,
    /// Rolling window capacity; the smoother flushes on the entry after this.
    pub window_capacity: usize,
    /// Screen rectangle overlays are projected into.
    pub viewport: PreviewViewport,
    /// Override for preview mirroring; `None` mirrors exactly when the
    /// camera faces the user.
    pub mirror: Option<bool>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            throttle_interval: DEFAULT_THROTTLE_INTERVAL,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            viewport: PreviewViewport::default(),
            mirror: None,
        }
    }
}

/// Everything the monitor reports while running.
#[derive(Debug)]
pub enum MonitorEvent {
    PhaseChanged(MonitorPhase),
    FrameProcessed {
        frame_index: usize,
        overlays: Vec<FaceOverlay>,
    },
    Smoothed(SmoothedResult),
    Error(String),
    Finished(MonitorSummary),
}

/// Counters accumulated over one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonitorSummary {
    pub frames_seen: usize,
    pub frames_inferred: usize,
    pub faces_classified: usize,
    pub smoothed_results: usize,
    pub no_majority_flushes: usize,
}

/// Orchestrates the per-frame pipeline: throttle → detect → crop/align →
/// classify → smooth → overlay.
///
/// Wires the collaborator seams together and drives them from a single
/// sequential loop, so iteration K+1 never starts before K has finished and
/// the smoother needs no locking. Each frame is moved into its iteration
/// and dropped on every exit path. This is a single-use struct: `run`
/// consumes the owned collaborators, so calling it twice will fail.
///
/// Per-frame errors are fail-open: a detector or classifier failure is
/// logged and that frame (or face) is skipped while the preview keeps
/// flowing. Only permission denial at startup is terminal.
pub struct AwarenessMonitor {
    feed: Option<Box<dyn CameraFeed>>,
    localizer_loader: Option<LocalizerLoader>,
    classifier_loader: Option<ClassifierLoader>,
    throttle: FrameThrottle,
    smoother: RollingSmoother,
    aligner: CropAligner,
    viewport: PreviewViewport,
    mirror: Option<bool>,
}

impl AwarenessMonitor {
    pub fn new(
        feed: Box<dyn CameraFeed>,
        localizer_loader: LocalizerLoader,
        classifier_loader: ClassifierLoader,
        config: MonitorConfig,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            feed: Some(feed),
            localizer_loader: Some(localizer_loader),
            classifier_loader: Some(classifier_loader),
            throttle: FrameThrottle::new(config.throttle_interval)?,
            smoother: RollingSmoother::new(config.window_capacity)?,
            aligner: CropAligner::new(CLASSIFIER_INPUT_SIDE),
            viewport: config.viewport,
            mirror: config.mirror,
        })
    }

    /// Run the monitor to feed exhaustion, emitting events along the way.
    ///
    /// Checks `cancelled` at the top of every iteration; in-flight work is
    /// never aborted, only the next iteration is prevented. A dropped
    /// receiver also ends the loop.
    pub fn run(
        &mut self,
        events: &Sender<MonitorEvent>,
        cancelled: &AtomicBool,
    ) -> Result<MonitorSummary, Box<dyn std::error::Error>> {
        let mut feed = self.feed.take().ok_or("Monitor already run")?;
        let localizer_loader = self.localizer_loader.take().ok_or("Monitor already run")?;
        let classifier_loader = self.classifier_loader.take().ok_or("Monitor already run")?;

        emit(events, MonitorEvent::PhaseChanged(MonitorPhase::Idle));
        emit(events, MonitorEvent::PhaseChanged(MonitorPhase::PermissionPending));
        if feed.request_access()? == PermissionStatus::Denied {
            emit(events, MonitorEvent::PhaseChanged(MonitorPhase::NoAccess));
            return Err("Camera permission denied".into());
        }

        emit(events, MonitorEvent::PhaseChanged(MonitorPhase::ModelLoading));
        let (mut localizer, mut classifier) = load_models(localizer_loader, classifier_loader);
        let inference_ready = localizer.is_some() && classifier.is_some();
        if !inference_ready {
            log::warn!("model loading incomplete; running preview only");
        }

        let metadata = feed.open()?;
        let mirror = self
            .mirror
            .unwrap_or(metadata.facing == CameraFacing::Front);
        let mapper = OverlayMapper::new(self.viewport, mirror);
        emit(events, MonitorEvent::PhaseChanged(MonitorPhase::Ready));
        emit(events, MonitorEvent::PhaseChanged(MonitorPhase::Running));

        let mut summary = MonitorSummary::default();
        for frame_result in feed.frames() {
            if cancelled.load(Ordering::Relaxed) {
                log::debug!("monitor cancelled after {} frames", summary.frames_seen);
                break;
            }
            let frame = match frame_result {
                Ok(frame) => frame,
                Err(e) => {
                    log::warn!("camera feed failed: {e}");
                    emit(events, MonitorEvent::Error(e.to_string()));
                    break;
                }
            };
            summary.frames_seen += 1;

            let run_inference = self.throttle.should_run() && inference_ready;
            let alive = self.process_frame(
                frame,
                run_inference,
                localizer.as_deref_mut(),
                classifier.as_deref_mut(),
                &mapper,
                (metadata.width, metadata.height),
                events,
                &mut summary,
            );
            if !alive {
                log::debug!("event receiver dropped; stopping the loop");
                break;
            }
        }
        feed.close();

        emit(events, MonitorEvent::PhaseChanged(MonitorPhase::Suspended));
        emit(events, MonitorEvent::Finished(summary.clone()));
        Ok(summary)
    }

    /// Run on a dedicated worker thread.
    ///
    /// Returns the event stream and a flag that stops the loop when set.
    /// A startup failure arrives as a single [`MonitorEvent::Error`].
    pub fn spawn(mut self) -> (Receiver<MonitorEvent>, Arc<AtomicBool>) {
        let (tx, rx) = crossbeam_channel::unbounded::<MonitorEvent>();
        let cancelled = Arc::new(AtomicBool::new(false));
        let cancelled_clone = cancelled.clone();

        thread::spawn(move || {
            if let Err(e) = self.run(&tx, &cancelled_clone) {
                let _ = tx.send(MonitorEvent::Error(e.to_string()));
            }
        });

        (rx, cancelled)
    }

    /// One frame through the heavy half of the pipeline.
    ///
    /// Takes the frame by value; every return path drops the buffer.
    /// Returns false once events can no longer be delivered.
    #[allow(clippy::too_many_arguments)]
    fn process_frame(
        &mut self,
        frame: Frame,
        run_inference: bool,
        localizer: Option<&mut (dyn FaceLocalizer + 'static)>,
        classifier: Option<&mut (dyn AwarenessClassifier + 'static)>,
        mapper: &OverlayMapper,
        capture: (u32, u32),
        events: &Sender<MonitorEvent>,
        summary: &mut MonitorSummary,
    ) -> bool {
        let frame_index = frame.index();
        if !run_inference {
            return emit(
                events,
                MonitorEvent::FrameProcessed {
                    frame_index,
                    overlays: Vec::new(),
                },
            );
        }
        let (localizer, classifier) = match (localizer, classifier) {
            (Some(l), Some(c)) => (l, c),
            // Guarded by inference_ready; degrade to preview if it slips.
            _ => {
                return emit(
                    events,
                    MonitorEvent::FrameProcessed {
                        frame_index,
                        overlays: Vec::new(),
                    },
                )
            }
        };
        summary.frames_inferred += 1;

        let detections = match localizer.detect(&frame) {
            Ok(detections) => detections,
            Err(e) => {
                log::warn!("face detection failed on frame {frame_index}: {e}");
                Vec::new()
            }
        };
        let overlays: Vec<FaceOverlay> = detections
            .iter()
            .map(|det| mapper.project(det, capture.0, capture.1))
            .collect();

        for detection in &detections {
            let Some(face) = self.aligner.align(&frame, detection) else {
                log::debug!("skipping degenerate detection on frame {frame_index}");
                continue;
            };
            let scores = match classifier.classify(&face) {
                Ok(scores) => scores,
                Err(e) => {
                    log::warn!("classification failed on frame {frame_index}: {e}");
                    continue;
                }
            };
            let prediction = top_prediction(&scores);
            summary.faces_classified += 1;

            match self
                .smoother
                .record(prediction.class_index, prediction.confidence as f64)
            {
                Some(FlushOutcome::Decided(result)) => {
                    summary.smoothed_results += 1;
                    if !emit(events, MonitorEvent::Smoothed(result)) {
                        return false;
                    }
                }
                Some(FlushOutcome::NoMajority) => {
                    summary.no_majority_flushes += 1;
                    log::debug!("rolling window flushed with no majority");
                }
                None => {}
            }
        }

        emit(
            events,
            MonitorEvent::FrameProcessed {
                frame_index,
                overlays,
            },
        )
    }
}

/// Load both models concurrently; a failure leaves that slot empty.
#[allow(clippy::type_complexity)]
fn load_models(
    localizer_loader: LocalizerLoader,
    classifier_loader: ClassifierLoader,
) -> (
    Option<Box<dyn FaceLocalizer>>,
    Option<Box<dyn AwarenessClassifier>>,
) {
    let localizer_handle = thread::spawn(move || localizer_loader().map_err(|e| e.to_string()));
    let classifier_handle = thread::spawn(move || classifier_loader().map_err(|e| e.to_string()));

    let localizer = join_loader(localizer_handle, "face localizer");
    let classifier = join_loader(classifier_handle, "awareness classifier");
    (localizer, classifier)
}

fn join_loader<T>(handle: thread::JoinHandle<Result<T, String>>, name: &str) -> Option<T> {
    match handle.join() {
        Ok(Ok(model)) => Some(model),
        Ok(Err(e)) => {
            log::warn!("failed to load {name}: {e}");
            None
        }
        Err(_) => {
            log::warn!("{name} loading thread panicked");
            None
        }
    }
}

/// Send an event; false once the receiver is gone.
fn emit(events: &Sender<MonitorEvent>, event: MonitorEvent) -> bool {
    events.send(event).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::domain::awareness::AwarenessLevel;
    use crate::classify::infrastructure::scripted_classifier::ScriptedClassifier;
    use crate::detection::infrastructure::replay_localizer::ReplayLocalizer;
    use crate::shared::camera_metadata::CameraMetadata;
    use crate::shared::face_detection::FaceDetection;
    use std::collections::HashMap;

    // --- Stubs ---

    struct StubFeed {
        frames: Vec<Frame>,
        permission: PermissionStatus,
        fail_after: Option<usize>,
        closed: Arc<AtomicBool>,
    }

    impl StubFeed {
        fn granted(frames: Vec<Frame>) -> Self {
            Self {
                frames,
                permission: PermissionStatus::Granted,
                fail_after: None,
                closed: Arc::new(AtomicBool::new(false)),
            }
        }

        fn denied() -> Self {
            Self {
                frames: Vec::new(),
                permission: PermissionStatus::Denied,
                fail_after: None,
                closed: Arc::new(AtomicBool::new(false)),
            }
        }
    }

    impl CameraFeed for StubFeed {
        fn request_access(&mut self) -> Result<PermissionStatus, Box<dyn std::error::Error>> {
            Ok(self.permission)
        }

        fn open(&mut self) -> Result<CameraMetadata, Box<dyn std::error::Error>> {
            Ok(CameraMetadata {
                width: 100,
                height: 100,
                fps: 30.0,
                facing: CameraFacing::Front,
            })
        }

        fn frames(
            &mut self,
        ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
            let fail_after = self.fail_after;
            Box::new(
                self.frames
                    .drain(..)
                    .enumerate()
                    .map(move |(i, frame)| match fail_after {
                        Some(n) if i >= n => Err("feed broke".into()),
                        _ => Ok(frame),
                    }),
            )
        }

        fn close(&mut self) {
            self.closed.store(true, Ordering::Relaxed);
        }
    }

    struct FailingLocalizer;

    impl FaceLocalizer for FailingLocalizer {
        fn detect(
            &mut self,
            _frame: &Frame,
        ) -> Result<Vec<FaceDetection>, Box<dyn std::error::Error>> {
            Err("detector error".into())
        }
    }

    // --- Helpers ---

    fn make_frame(index: usize) -> Frame {
        Frame::new(vec![128; 100 * 100 * 3], 100, 100, 3, index)
    }

    fn make_frames(count: usize) -> Vec<Frame> {
        (0..count).map(make_frame).collect()
    }

    fn face_everywhere(frame_count: usize) -> LocalizerLoader {
        let script: HashMap<usize, Vec<FaceDetection>> = (0..frame_count)
            .map(|i| (i, vec![FaceDetection::new((20.0, 20.0), (80.0, 80.0), 0.95)]))
            .collect();
        let script = Arc::new(script);
        Box::new(move || Ok(Box::new(ReplayLocalizer::new(script)) as Box<dyn FaceLocalizer>))
    }

    fn always_aware(frame_count: usize) -> ClassifierLoader {
        let script = vec![[0.1f32, 0.8, 0.1]; frame_count];
        Box::new(move || {
            Ok(Box::new(ScriptedClassifier::sequence(script)) as Box<dyn AwarenessClassifier>)
        })
    }

    fn failing_localizer_loader() -> LocalizerLoader {
        Box::new(|| Ok(Box::new(FailingLocalizer) as Box<dyn FaceLocalizer>))
    }

    fn load_failure_loader() -> LocalizerLoader {
        Box::new(|| Err("model file corrupt".into()))
    }

    fn run_to_summary(
        feed: StubFeed,
        localizer: LocalizerLoader,
        classifier: ClassifierLoader,
        config: MonitorConfig,
    ) -> (MonitorSummary, Vec<MonitorEvent>) {
        let mut monitor =
            AwarenessMonitor::new(Box::new(feed), localizer, classifier, config).unwrap();
        let (tx, rx) = crossbeam_channel::unbounded();
        let cancelled = AtomicBool::new(false);
        let summary = monitor.run(&tx, &cancelled).unwrap();
        drop(tx);
        (summary, rx.iter().collect())
    }

    fn phases(events: &[MonitorEvent]) -> Vec<MonitorPhase> {
        events
            .iter()
            .filter_map(|e| match e {
                MonitorEvent::PhaseChanged(phase) => Some(*phase),
                _ => None,
            })
            .collect()
    }

    // --- Tests ---

    #[test]
    fn test_processes_all_frames_and_smooths() {
        let (summary, events) = run_to_summary(
            StubFeed::granted(make_frames(5)),
            face_everywhere(5),
            always_aware(5),
            MonitorConfig::default(),
        );

        assert_eq!(summary.frames_seen, 5);
        assert_eq!(summary.frames_inferred, 5);
        assert_eq!(summary.faces_classified, 5);
        // Capacity 4: the 5th record flushes a unanimous level-10 window.
        assert_eq!(summary.smoothed_results, 1);
        assert_eq!(summary.no_majority_flushes, 0);

        let smoothed: Vec<&SmoothedResult> = events
            .iter()
            .filter_map(|e| match e {
                MonitorEvent::Smoothed(result) => Some(result),
                _ => None,
            })
            .collect();
        assert_eq!(smoothed.len(), 1);
        assert_eq!(smoothed[0].level, AwarenessLevel::Aware);
    }

    #[test]
    fn test_phase_sequence_on_happy_path() {
        let (_, events) = run_to_summary(
            StubFeed::granted(make_frames(1)),
            face_everywhere(1),
            always_aware(1),
            MonitorConfig::default(),
        );

        assert_eq!(
            phases(&events),
            vec![
                MonitorPhase::Idle,
                MonitorPhase::PermissionPending,
                MonitorPhase::ModelLoading,
                MonitorPhase::Ready,
                MonitorPhase::Running,
                MonitorPhase::Suspended,
            ]
        );
    }

    #[test]
    fn test_permission_denied_is_terminal() {
        let mut monitor = AwarenessMonitor::new(
            Box::new(StubFeed::denied()),
            face_everywhere(0),
            always_aware(0),
            MonitorConfig::default(),
        )
        .unwrap();
        let (tx, rx) = crossbeam_channel::unbounded();
        let cancelled = AtomicBool::new(false);

        assert!(monitor.run(&tx, &cancelled).is_err());
        drop(tx);
        let events: Vec<MonitorEvent> = rx.iter().collect();
        let seen = phases(&events);
        assert_eq!(
            seen,
            vec![
                MonitorPhase::Idle,
                MonitorPhase::PermissionPending,
                MonitorPhase::NoAccess,
            ]
        );
        assert!(!seen.contains(&MonitorPhase::Running));
    }

    #[test]
    fn test_model_load_failure_degrades_to_preview_only() {
        let (summary, events) = run_to_summary(
            StubFeed::granted(make_frames(3)),
            load_failure_loader(),
            always_aware(3),
            MonitorConfig::default(),
        );

        assert_eq!(summary.frames_seen, 3);
        assert_eq!(summary.frames_inferred, 0);
        assert_eq!(summary.faces_classified, 0);
        // Frames still flow, just with no overlays.
        let processed = events
            .iter()
            .filter(|e| matches!(e, MonitorEvent::FrameProcessed { .. }))
            .count();
        assert_eq!(processed, 3);
    }

    #[test]
    fn test_detector_failure_is_fail_open() {
        let (summary, events) = run_to_summary(
            StubFeed::granted(make_frames(4)),
            failing_localizer_loader(),
            always_aware(4),
            MonitorConfig::default(),
        );

        // Every frame attempted inference, found nothing, and moved on.
        assert_eq!(summary.frames_seen, 4);
        assert_eq!(summary.frames_inferred, 4);
        assert_eq!(summary.faces_classified, 0);
        assert!(phases(&events).contains(&MonitorPhase::Suspended));
    }

    #[test]
    fn test_classifier_failure_discards_face_and_continues() {
        // Script shorter than the face count: classification fails from
        // frame 2 on but the loop keeps going.
        let classifier: ClassifierLoader = Box::new(|| {
            Ok(Box::new(ScriptedClassifier::sequence(vec![[0.8, 0.1, 0.1]; 2]))
                as Box<dyn AwarenessClassifier>)
        });
        let (summary, _) = run_to_summary(
            StubFeed::granted(make_frames(5)),
            face_everywhere(5),
            classifier,
            MonitorConfig::default(),
        );

        assert_eq!(summary.frames_seen, 5);
        assert_eq!(summary.frames_inferred, 5);
        assert_eq!(summary.faces_classified, 2);
    }

    #[test]
    fn test_throttle_limits_inference() {
        let config = MonitorConfig {
            throttle_interval: 3,
            ..Default::default()
        };
        let (summary, _) = run_to_summary(
            StubFeed::granted(make_frames(10)),
            face_everywhere(10),
            always_aware(10),
            config,
        );

        assert_eq!(summary.frames_seen, 10);
        // Frames 0, 3, 6, 9.
        assert_eq!(summary.frames_inferred, 4);
    }

    #[test]
    fn test_degenerate_detection_never_reaches_classifier() {
        let script = Arc::new(HashMap::from([(
            0,
            vec![FaceDetection::new((50.0, 50.0), (50.0, 80.0), 0.9)],
        )]));
        let localizer: LocalizerLoader = Box::new(move || {
            Ok(Box::new(ReplayLocalizer::new(script)) as Box<dyn FaceLocalizer>)
        });
        let (summary, _) = run_to_summary(
            StubFeed::granted(make_frames(1)),
            localizer,
            always_aware(1),
            MonitorConfig::default(),
        );

        assert_eq!(summary.frames_inferred, 1);
        assert_eq!(summary.faces_classified, 0);
    }

    #[test]
    fn test_feed_error_ends_loop_with_error_event() {
        let mut feed = StubFeed::granted(make_frames(10));
        feed.fail_after = Some(3);
        let (summary, events) = run_to_summary(
            feed,
            face_everywhere(10),
            always_aware(10),
            MonitorConfig::default(),
        );

        assert_eq!(summary.frames_seen, 3);
        assert!(events
            .iter()
            .any(|e| matches!(e, MonitorEvent::Error(msg) if msg.contains("feed broke"))));
        assert!(phases(&events).contains(&MonitorPhase::Suspended));
    }

    #[test]
    fn test_cancellation_stops_before_first_frame() {
        let feed = StubFeed::granted(make_frames(10));
        let closed = feed.closed.clone();
        let mut monitor = AwarenessMonitor::new(
            Box::new(feed),
            face_everywhere(10),
            always_aware(10),
            MonitorConfig::default(),
        )
        .unwrap();
        let (tx, _rx) = crossbeam_channel::unbounded();
        let cancelled = AtomicBool::new(true);

        let summary = monitor.run(&tx, &cancelled).unwrap();
        assert_eq!(summary.frames_seen, 0);
        assert!(closed.load(Ordering::Relaxed));
    }

    #[test]
    fn test_dropped_receiver_ends_loop() {
        let feed = StubFeed::granted(make_frames(1000));
        let closed = feed.closed.clone();
        let mut monitor = AwarenessMonitor::new(
            Box::new(feed),
            face_everywhere(1000),
            always_aware(1000),
            MonitorConfig::default(),
        )
        .unwrap();
        let (tx, rx) = crossbeam_channel::unbounded();
        drop(rx);
        let cancelled = AtomicBool::new(false);

        // No receiver: sends fail, so the loop must stop almost
        // immediately instead of grinding through the whole feed.
        let summary = monitor.run(&tx, &cancelled).unwrap();
        assert!(summary.frames_seen <= 1);
        assert!(closed.load(Ordering::Relaxed));
    }

    #[test]
    fn test_monitor_is_single_use() {
        let mut monitor = AwarenessMonitor::new(
            Box::new(StubFeed::granted(make_frames(1))),
            face_everywhere(1),
            always_aware(1),
            MonitorConfig::default(),
        )
        .unwrap();
        let (tx, _rx) = crossbeam_channel::unbounded();
        let cancelled = AtomicBool::new(false);

        monitor.run(&tx, &cancelled).unwrap();
        assert!(monitor.run(&tx, &cancelled).is_err());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let bad_throttle = MonitorConfig {
            throttle_interval: 0,
            ..Default::default()
        };
        assert!(AwarenessMonitor::new(
            Box::new(StubFeed::granted(Vec::new())),
            face_everywhere(0),
            always_aware(0),
            bad_throttle,
        )
        .is_err());

        let bad_window = MonitorConfig {
            window_capacity: 0,
            ..Default::default()
        };
        assert!(AwarenessMonitor::new(
            Box::new(StubFeed::granted(Vec::new())),
            face_everywhere(0),
            always_aware(0),
            bad_window,
        )
        .is_err());
    }

    #[test]
    fn test_spawn_delivers_events_and_finishes() {
        let monitor = AwarenessMonitor::new(
            Box::new(StubFeed::granted(make_frames(5))),
            face_everywhere(5),
            always_aware(5),
            MonitorConfig::default(),
        )
        .unwrap();

        let (rx, _cancel) = monitor.spawn();
        let events: Vec<MonitorEvent> = rx.iter().collect();
        let finished = events.iter().find_map(|e| match e {
            MonitorEvent::Finished(summary) => Some(summary.clone()),
            _ => None,
        });
        let summary = finished.expect("run should finish");
        assert_eq!(summary.frames_seen, 5);
    }

    #[test]
    fn test_spawn_reports_permission_denial_as_error() {
        let monitor = AwarenessMonitor::new(
            Box::new(StubFeed::denied()),
            face_everywhere(0),
            always_aware(0),
            MonitorConfig::default(),
        )
        .unwrap();

        let (rx, _cancel) = monitor.spawn();
        let events: Vec<MonitorEvent> = rx.iter().collect();
        assert!(events
            .iter()
            .any(|e| matches!(e, MonitorEvent::Error(msg) if msg.contains("permission denied"))));
    }
}
