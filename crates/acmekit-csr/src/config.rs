use serde::{Deserialize, Serialize};

/// Configuration for the EC CSR plugin.
///
/// Passed explicitly at plugin construction; there is no process-wide
/// settings source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EcConfig {
    /// Named curve for newly generated keys, e.g. `"secp384r1"`.
    ///
    /// Absent or unrecognized values fall back to the default curve
    /// instead of failing issuance.
    pub curve: Option<String>,
}

impl EcConfig {
    /// Set the named curve.
    pub fn with_curve(mut self, curve: &str) -> Self {
        self.curve = Some(curve.to_string());
        self
    }
}
