use serde::Serialize;

/// Point-in-time view of the camera, suitable for logging or dumping as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CameraSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub zoom: f32,
    pub speed: f32,
    pub buffer_width: u32,
    pub buffer_height: u32,
    pub fullscreen: bool,
}

impl CameraSnapshot {
    /// FNV-1a hash over the raw field bits.
    ///
    /// Two snapshots hash equal iff every field is bit-identical, which is
    /// what render throttling wants: any sub-pixel camera motion counts.
    pub fn fingerprint(&self) -> u64 {
        let words = [
            self.x.to_bits(),
            self.y.to_bits(),
            self.width.to_bits(),
            self.height.to_bits(),
            self.zoom.to_bits(),
            self.speed.to_bits(),
            self.buffer_width,
            self.buffer_height,
            u32::from(self.fullscreen),
        ];
        fnv1a64(words.iter().flat_map(|w| w.to_le_bytes()))
    }
}

fn fnv1a64(bytes: impl Iterator<Item = u8>) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_tracks_subpixel_motion() {
        let a = CameraSnapshot {
            x: 10.0,
            ..CameraSnapshot::default()
        };
        let b = CameraSnapshot { x: 10.25, ..a };
        assert_eq!(a.fingerprint(), a.fingerprint());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
