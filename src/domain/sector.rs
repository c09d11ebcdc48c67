//! Sector catalog and per-sector trait vectors.

/// Trait axis labels, in [`SectorTraits::to_array`] order.
pub const TRAIT_LABELS: [&str; 8] = [
    "안정성",
    "변동성",
    "성장성",
    "가치성",
    "기술성",
    "전통성",
    "보수성",
    "공격성",
];

/// Eight display-only scores in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorTraits {
    pub stability: f64,
    pub volatility: f64,
    pub growth: f64,
    pub value: f64,
    pub technology: f64,
    pub tradition: f64,
    pub conservatism: f64,
    pub aggressiveness: f64,
}

impl SectorTraits {
    pub const fn from_array(v: [f64; 8]) -> Self {
        Self {
            stability: v[0],
            volatility: v[1],
            growth: v[2],
            value: v[3],
            technology: v[4],
            tradition: v[5],
            conservatism: v[6],
            aggressiveness: v[7],
        }
    }

    pub fn to_array(&self) -> [f64; 8] {
        [
            self.stability,
            self.volatility,
            self.growth,
            self.value,
            self.technology,
            self.tradition,
            self.conservatism,
            self.aggressiveness,
        ]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Sector {
    pub name: &'static str,
    pub traits: SectorTraits,
}

const fn sector(name: &'static str, traits: [f64; 8]) -> Sector {
    Sector {
        name,
        traits: SectorTraits::from_array(traits),
    }
}

pub static SECTORS: [Sector; 19] = [
    sector("일반서비스", [0.6, 0.4, 0.5, 0.5, 0.4, 0.4, 0.5, 0.4]),
    sector("보험", [0.8, 0.3, 0.3, 0.8, 0.2, 0.8, 0.8, 0.2]),
    sector("증권", [0.4, 0.8, 0.6, 0.5, 0.4, 0.5, 0.3, 0.8]),
    sector("금융", [0.8, 0.3, 0.3, 0.9, 0.3, 0.8, 0.8, 0.2]),
    sector("통신", [0.9, 0.2, 0.3, 0.8, 0.6, 0.6, 0.9, 0.1]),
    sector("운송·창고", [0.5, 0.6, 0.5, 0.6, 0.3, 0.6, 0.5, 0.5]),
    sector("건설", [0.4, 0.7, 0.4, 0.7, 0.2, 0.8, 0.4, 0.6]),
    sector("전기·가스", [0.9, 0.2, 0.2, 0.8, 0.3, 0.8, 0.9, 0.1]),
    sector("유통", [0.7, 0.4, 0.4, 0.7, 0.3, 0.7, 0.7, 0.3]),
    sector("운송장비·부품", [0.5, 0.6, 0.6, 0.6, 0.6, 0.5, 0.4, 0.6]),
    sector("의료·정밀기기", [0.4, 0.7, 0.8, 0.3, 0.8, 0.2, 0.3, 0.7]),
    sector("전기전자", [0.4, 0.7, 0.9, 0.3, 0.9, 0.2, 0.2, 0.8]),
    sector("기계·장비", [0.5, 0.6, 0.6, 0.5, 0.6, 0.5, 0.4, 0.6]),
    sector("금속", [0.5, 0.6, 0.4, 0.7, 0.3, 0.8, 0.5, 0.5]),
    sector("비금속", [0.6, 0.5, 0.3, 0.7, 0.2, 0.8, 0.6, 0.4]),
    sector("제약", [0.3, 0.8, 0.9, 0.2, 0.8, 0.2, 0.2, 0.9]),
    sector("화학", [0.5, 0.6, 0.6, 0.6, 0.6, 0.5, 0.4, 0.6]),
    sector("종이·목재", [0.7, 0.4, 0.2, 0.8, 0.1, 0.9, 0.7, 0.3]),
    sector("섬유·의류", [0.6, 0.5, 0.3, 0.7, 0.2, 0.8, 0.6, 0.4]),
];

pub fn find(name: &str) -> Option<&'static Sector> {
    SECTORS.iter().find(|s| s.name == name)
}

pub fn is_known(name: &str) -> bool {
    find(name).is_some()
}

pub fn traits_for(name: &str) -> Option<SectorTraits> {
    find(name).map(|s| s.traits)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    SECTORS.iter().map(|s| s.name)
}
