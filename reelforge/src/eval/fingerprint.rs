use xxhash_rust::xxh3::Xxh3;

use crate::{
    foundation::error::{ReelError, ReelResult},
    scene::layer::FrameLayout,
};

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit fingerprint of an evaluated frame.
///
/// Two frames with the same fingerprint draw the same layers; hosts use it to skip re-rendering
/// still frames and to check that repeated evaluation is deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint the layers of `layout`.
///
/// Only what is drawn is hashed: segment name, root style and layers. Neither the global frame
/// nor the local frame is part of the digest, so identical still frames share a fingerprint.
pub fn fingerprint_layout(layout: &FrameLayout) -> ReelResult<FrameFingerprint> {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    for seg in &layout.segments {
        write_field(&mut h, seg.segment.as_bytes());
        write_field(&mut h, &to_json(&seg.root)?);
        write_field(&mut h, &to_json(&seg.layers)?);
    }
    let v = h.digest128();
    Ok(FrameFingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> ReelResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|e| ReelError::serde(e.to_string()))
}

// Length-prefixed so field boundaries cannot shift between frames.
fn write_field(h: &mut Xxh3, bytes: &[u8]) {
    h.update(&(bytes.len() as u64).to_le_bytes());
    h.update(bytes);
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
