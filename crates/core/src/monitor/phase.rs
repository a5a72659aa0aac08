use std::fmt;

/// Lifecycle of the monitor, from construction to teardown.
///
/// The happy path is Idle → PermissionPending → ModelLoading → Ready →
/// Running → Suspended. `NoAccess` is terminal: a denied camera permission
/// means the monitor never reaches `Running`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonitorPhase {
    Idle,
    PermissionPending,
    ModelLoading,
    Ready,
    Running,
    Suspended,
    NoAccess,
}

impl fmt::Display for MonitorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MonitorPhase::Idle => "idle",
            MonitorPhase::PermissionPending => "permission pending",
            MonitorPhase::ModelLoading => "model loading",
            MonitorPhase::Ready => "ready",
            MonitorPhase::Running => "running",
            MonitorPhase::Suspended => "suspended",
            MonitorPhase::NoAccess => "no access",
        };
        write!(f, "{name}")
    }
}
