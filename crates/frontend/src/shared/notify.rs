//! User-facing notices, decoupled from how they are shown.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Capability to surface a short message to the user.
///
/// Screens receive it as `&dyn Notifier`; `ToastService` is the browser
/// implementation.
pub trait Notifier {
    fn notify(&self, kind: NoticeKind, message: &str);
}
