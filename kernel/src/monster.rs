//! `MonsterBaseStats`: the small struct produced by the external monster
//! base-stat catalog (only the struct it hands back is in scope here).

/// Base HP/ATK/DEF/SPD/CR/CD for a single unit, before any runes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterBaseStats {
    pub hp: i64,
    pub atk: i64,
    pub def: i64,
    pub spd: i64,
    /// Default 15 when the caller omits it.
    pub cr: i64,
    /// Default 50 when the caller omits it.
    pub cd: i64,
}

impl MonsterBaseStats {
    #[must_use]
    pub const fn new(hp: i64, atk: i64, def: i64, spd: i64) -> Self {
        Self { hp, atk, def, spd, cr: 15, cd: 50 }
    }

    #[must_use]
    pub const fn with_base_cr_cd(mut self, cr: i64, cd: i64) -> Self {
        self.cr = cr;
        self.cd = cd;
        self
    }
}
