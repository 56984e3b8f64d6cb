use acmekit_crypto::EcCurve;

/// Curve used when configuration is absent or unresolvable.
pub const DEFAULT_CURVE: EcCurve = EcCurve::Secp384r1;

/// Resolve a configured curve name to a concrete curve.
///
/// Total function: an absent, empty, or unrecognized name falls back to
/// [`DEFAULT_CURVE`] so a broken curve configuration can never block
/// certificate issuance. An actually-provided name that fails to resolve
/// is reported at warning level.
pub fn resolve_curve(configured: Option<&str>) -> EcCurve {
    let curve = match configured {
        None => DEFAULT_CURVE,
        Some(name) => match EcCurve::from_name(name) {
            Some(curve) => curve,
            None => {
                tracing::warn!("Unknown curve {:?}, using {}", name, DEFAULT_CURVE);
                DEFAULT_CURVE
            }
        },
    };
    tracing::debug!("Using curve {}", curve);
    curve
}
