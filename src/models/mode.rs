//! Cipher mode definitions and the canonical ordered mode list.

/// AES operating mode selectable in the UI.
///
/// The variants appear in the canonical order used by the tab strip and the
/// mobile menu; keyboard navigation wraps around this order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Electronic codebook. No IV; block-by-block, leaks structure.
    Ecb,
    /// Cipher block chaining (default). PKCS#7 padded, 16-byte IV.
    #[default]
    Cbc,
    /// Counter mode. Stream cipher driven by a 16-byte counter block.
    Ctr,
    /// Cipher feedback. Self-synchronizing stream mode.
    Cfb,
    /// Output feedback. Keystream generated independently of the data.
    Ofb,
}

/// Canonical ordered list of all selectable modes.
pub const MODES: [Mode; 5] = [Mode::Ecb, Mode::Cbc, Mode::Ctr, Mode::Cfb, Mode::Ofb];

impl Mode {
    /// Stable identifier used for element ids and debugging.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Ecb => "ecb",
            Self::Cbc => "cbc",
            Self::Ctr => "ctr",
            Self::Cfb => "cfb",
            Self::Ofb => "ofb",
        }
    }

    /// Display label shown on the tab / menu entry.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ecb => "ECB",
            Self::Cbc => "CBC",
            Self::Ctr => "CTR",
            Self::Cfb => "CFB",
            Self::Ofb => "OFB",
        }
    }

    /// Keyboard shortcut character for direct selection in the tab strip.
    pub fn shortcut(&self) -> char {
        match self {
            Self::Ecb => 'e',
            Self::Cbc => 'b',
            Self::Ctr => 't',
            Self::Cfb => 'f',
            Self::Ofb => 'o',
        }
    }

    /// One-line description used for tooltips.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ecb => "Electronic codebook (no IV, reveals patterns)",
            Self::Cbc => "Cipher block chaining",
            Self::Ctr => "Counter mode",
            Self::Cfb => "Cipher feedback",
            Self::Ofb => "Output feedback",
        }
    }

    /// Position of this mode within [`MODES`].
    pub fn ordinal(&self) -> usize {
        match self {
            Self::Ecb => 0,
            Self::Cbc => 1,
            Self::Ctr => 2,
            Self::Cfb => 3,
            Self::Ofb => 4,
        }
    }

    /// Whether this mode consumes an IV/counter. Only ECB does not.
    pub fn requires_iv(&self) -> bool {
        !matches!(self, Self::Ecb)
    }

    /// User-facing name of the IV field for this mode.
    pub fn iv_label(&self) -> &'static str {
        match self {
            Self::Ctr => "counter",
            _ => "IV",
        }
    }

    /// Looks up a mode by its keyboard shortcut character.
    pub fn from_shortcut(c: char) -> Option<Self> {
        MODES.iter().copied().find(|m| m.shortcut() == c)
    }

    /// Next mode in canonical order, wrapping from last to first.
    pub fn next(&self) -> Self {
        MODES[(self.ordinal() + 1) % MODES.len()]
    }

    /// Previous mode in canonical order, wrapping from first to last.
    pub fn prev(&self) -> Self {
        MODES[(self.ordinal() + MODES.len() - 1) % MODES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals_match_canonical_list() {
        for (i, mode) in MODES.iter().enumerate() {
            assert_eq!(mode.ordinal(), i);
        }
    }

    #[test]
    fn test_wrapping_navigation() {
        assert_eq!(MODES[0].prev(), *MODES.last().unwrap());
        assert_eq!(MODES.last().unwrap().next(), MODES[0]);
        assert_eq!(Mode::Cbc.next(), Mode::Ctr);
        assert_eq!(Mode::Ctr.prev(), Mode::Cbc);
    }

    #[test]
    fn test_iv_requirements() {
        assert!(!Mode::Ecb.requires_iv());
        for mode in MODES.iter().filter(|m| **m != Mode::Ecb) {
            assert!(mode.requires_iv());
        }
        assert_eq!(Mode::Ctr.iv_label(), "counter");
        assert_eq!(Mode::Cbc.iv_label(), "IV");
        assert_eq!(Mode::Ofb.iv_label(), "IV");
    }

    #[test]
    fn test_lookups() {
        assert_eq!(Mode::from_shortcut('b'), Some(Mode::Cbc));
        assert_eq!(Mode::from_shortcut('z'), None);
    }

    #[test]
    fn test_ids_and_shortcuts_unique() {
        for a in MODES {
            for b in MODES {
                if a != b {
                    assert_ne!(a.id(), b.id());
                    assert_ne!(a.shortcut(), b.shortcut());
                }
            }
        }
    }
}
