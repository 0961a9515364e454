// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: element identifiers, flags, and pointer buttons.

/// Identifier for an element in a [`Scene`](crate::Scene).
///
/// This is a small, copyable handle into the scene's element arena.
/// Elements are never destroyed, so an identifier stays valid for the lifetime
/// of the scene that created it and is never reused.
///
/// Identifiers are only meaningful to the scene that created them; passing one
/// to another scene panics or aliases an unrelated element.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Per-element state and containment flags.
    ///
    /// `HOVERED` and `WAS_HOVERED` are owned by the overlap resolver.
    /// `CONTAINER` and `IGNORE_CONTAINER` are configured by the application.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// The pointer is over this element as of the last resolution pass.
        const HOVERED          = 0b0000_0001;
        /// Value of `HOVERED` before the last resolution pass.
        const WAS_HOVERED      = 0b0000_0010;
        /// Descendants are only hoverable while this element is hovered.
        const CONTAINER        = 0b0000_0100;
        /// This element ignores the hover state of its container ancestors.
        const IGNORE_CONTAINER = 0b0000_1000;
    }
}

/// Pointer button identifier as delivered by the input source.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct MouseButton(pub u16);

impl MouseButton {
    /// Primary (usually left) button.
    pub const PRIMARY: Self = Self(1);
    /// Secondary (usually right) button.
    pub const SECONDARY: Self = Self(2);
    /// Middle button.
    pub const MIDDLE: Self = Self(3);
}

impl From<u16> for MouseButton {
    fn from(id: u16) -> Self {
        Self(id)
    }
}
