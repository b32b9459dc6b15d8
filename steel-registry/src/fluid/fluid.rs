/// Fluid ID - uses raw registry ID (u16) to match vanilla
/// Vanilla IDs:
///   0 = Empty
///   1 = Flowing_Water
///   2 = Water
///   3 = Flowing_Lava
///   4 = Lava
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FluidId(pub u16);

impl FluidId {
    /// No fluid.
    pub const EMPTY: FluidId = FluidId(0);
    /// Flowing water.
    pub const FLOWING_WATER: FluidId = FluidId(1);
    /// Still water.
    pub const WATER: FluidId = FluidId(2);
    /// Flowing lava.
    pub const FLOWING_LAVA: FluidId = FluidId(3);
    /// Still lava.
    pub const LAVA: FluidId = FluidId(4);

    /// Returns true if this is the empty fluid
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// A registered fluid.
#[derive(Debug)]
pub struct FluidEntry {
    /// Raw id.
    pub id: FluidId,
    /// Registry key path, e.g. `water`.
    pub name: &'static str,
}

/// The fluid content of a single block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FluidState {
    /// The fluid, [`FluidId::EMPTY`] for dry blocks.
    pub fluid_id: FluidId,
    /// Fill amount, 1..=8; 8 on a source.
    pub amount: u8,
}

impl FluidState {
    /// The amount held by a source block.
    pub const SOURCE_AMOUNT: u8 = 8;

    /// A dry block.
    pub const EMPTY: FluidState = FluidState {
        fluid_id: FluidId::EMPTY,
        amount: 0,
    };

    /// A full source of `fluid_id`.
    #[must_use]
    pub const fn source(fluid_id: FluidId) -> Self {
        Self {
            fluid_id,
            amount: Self::SOURCE_AMOUNT,
        }
    }

    /// Converts a liquid block `level` property into a fluid state.
    /// Level 0 is a source; 1..=7 decrease the amount; 8+ is falling fluid.
    #[must_use]
    pub const fn from_block_level(source_id: FluidId, flowing_id: FluidId, level: u8) -> Self {
        match level {
            0 => Self::source(source_id),
            1..=7 => Self {
                fluid_id: flowing_id,
                amount: Self::SOURCE_AMOUNT - level,
            },
            _ => Self {
                fluid_id: flowing_id,
                amount: Self::SOURCE_AMOUNT,
            },
        }
    }

    /// Returns true if there is no fluid.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fluid_id.is_empty()
    }

    /// Returns true for a still, full fluid.
    #[must_use]
    pub const fn is_source(&self) -> bool {
        matches!(self.fluid_id, FluidId::WATER | FluidId::LAVA)
            && self.amount == Self::SOURCE_AMOUNT
    }
}
