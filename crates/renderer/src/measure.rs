/// Size constraint handed down by the parent layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// No constraint; take the desired size.
    Unspecified,
    /// Up to this many pixels.
    AtMost(f32),
    /// Exactly this many pixels.
    Exactly(f32),
}

/// Reconcile a desired size with the parent's constraint.
///
/// The desired size is rounded up to whole pixels first.
pub fn resolve_size(desired: f32, spec: MeasureSpec) -> f32 {
    let desired = desired.max(0.0).ceil();
    match spec {
        MeasureSpec::Unspecified => desired,
        MeasureSpec::AtMost(max) => desired.min(max),
        MeasureSpec::Exactly(size) => size,
    }
}
