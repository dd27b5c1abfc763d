use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Low 16 bits are controlled by the name owner, the rest by the parent.
pub const OWNER_CONTROLLED_MASK: u32 = 0xFFFF;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Fuse {
    CannotUnwrap,
    CannotBurnFuses,
    CannotTransfer,
    CannotSetResolver,
    CannotSetTtl,
    CannotCreateSubdomain,
    CannotApprove,
    ParentCannotControl,
    IsDotEth,
}

impl Fuse {
    pub const ALL: [Fuse; 9] = [
        Fuse::CannotUnwrap,
        Fuse::CannotBurnFuses,
        Fuse::CannotTransfer,
        Fuse::CannotSetResolver,
        Fuse::CannotSetTtl,
        Fuse::CannotCreateSubdomain,
        Fuse::CannotApprove,
        Fuse::ParentCannotControl,
        Fuse::IsDotEth,
    ];

    pub const fn bit(self) -> u32 {
        match self {
            Fuse::CannotUnwrap => 1,
            Fuse::CannotBurnFuses => 2,
            Fuse::CannotTransfer => 4,
            Fuse::CannotSetResolver => 8,
            Fuse::CannotSetTtl => 16,
            Fuse::CannotCreateSubdomain => 32,
            Fuse::CannotApprove => 64,
            Fuse::ParentCannotControl => 1 << 16,
            Fuse::IsDotEth => 1 << 17,
        }
    }
}

/// Burned fuses of a wrapped name. Fuses can only ever be added.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, Default)]
#[serde(transparent)]
pub struct Fuses(u32);

impl Fuses {
    pub fn empty() -> Self {
        Fuses(0)
    }

    /// Fuses an owner asks for, keeping only the owner-controlled range.
    pub fn owner_controlled(bits: u32) -> Self {
        Fuses(bits & OWNER_CONTROLLED_MASK)
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, fuse: Fuse) -> bool {
        self.0 & fuse.bit() != 0
    }

    pub fn burn(&mut self, fuse: Fuse) {
        self.0 |= fuse.bit();
    }

    pub fn burn_all(&mut self, other: Fuses) {
        self.0 |= other.0;
    }

    pub fn with(mut self, fuse: Fuse) -> Self {
        self.burn(fuse);
        self
    }

    /// Whether anything other than `CannotUnwrap` is burned in the owner range.
    pub fn restricts_beyond_unwrap(&self) -> bool {
        self.0 & OWNER_CONTROLLED_MASK & !Fuse::CannotUnwrap.bit() != 0
    }

    pub fn names(&self) -> Vec<Fuse> {
        Fuse::ALL
            .iter()
            .copied()
            .filter(|fuse| self.contains(*fuse))
            .collect()
    }

    /// Fuses for a freshly registered second-level name.
    pub fn for_registration(owner_controlled_fuses: u32) -> Self {
        let requested = Fuses::owner_controlled(owner_controlled_fuses);
        let mut fuses = Fuses::empty()
            .with(Fuse::ParentCannotControl)
            .with(Fuse::IsDotEth);
        if !requested.is_empty() {
            fuses.burn(Fuse::CannotUnwrap);
        }
        fuses.burn_all(requested);
        fuses
    }
}
