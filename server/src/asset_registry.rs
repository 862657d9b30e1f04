use crate::pawn::PawnConfiguration;

/// Process-wide asset defaults. Supplies the last-resort pawn configuration
/// when a loaded experience bundle does not define its own.
pub trait AssetRegistry {
    fn default_pawn_configuration(&self) -> Option<&PawnConfiguration>;
}

/// An owning registry with fixed contents, for hosts that configure their
/// defaults up front
pub struct StaticAssetRegistry {
    default_pawn: Option<PawnConfiguration>,
}

impl StaticAssetRegistry {
    pub fn new(default_pawn: Option<PawnConfiguration>) -> Self {
        Self { default_pawn }
    }

    pub fn empty() -> Self {
        Self::new(None)
    }
}

impl AssetRegistry for StaticAssetRegistry {
    fn default_pawn_configuration(&self) -> Option<&PawnConfiguration> {
        self.default_pawn.as_ref()
    }
}
