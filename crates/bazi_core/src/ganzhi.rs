//! Heavenly stems, earthly branches and the 60-term sexagenary cycle.
//!
//! Stems cycle with period 10, branches with period 12. Paired in lockstep
//! they form 60 distinct pillars (甲子 .. 癸亥).

use std::fmt::{Display, Formatter};

/// The 10 heavenly stems (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (index 0 = 甲).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

const STEM_GLYPHS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const STEM_NAMES: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Stem {
    /// Stem at a cyclic position; any integer is reduced modulo 10.
    pub const fn from_index(index: i64) -> Self {
        ALL_STEMS[index.rem_euclid(10) as usize]
    }

    /// 0-based index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese character.
    pub fn glyph(self) -> &'static str {
        STEM_GLYPHS[self.index() as usize]
    }

    /// Pinyin name without tone marks.
    pub fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// The 12 earthly branches (地支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in order (index 0 = 子).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

const BRANCH_GLYPHS: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const BRANCH_NAMES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

impl Branch {
    /// Branch at a cyclic position; any integer is reduced modulo 12.
    pub const fn from_index(index: i64) -> Self {
        ALL_BRANCHES[index.rem_euclid(12) as usize]
    }

    /// 0-based index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Chinese character.
    pub fn glyph(self) -> &'static str {
        BRANCH_GLYPHS[self.index() as usize]
    }

    /// Pinyin name without tone marks.
    pub fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A stem-branch pair. Displays as `"<stem> <branch>"`, e.g. `"甲 子"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at a position in the 60-term cycle (0 = 甲子, 59 = 癸亥).
    ///
    /// Any integer is reduced modulo 60.
    pub const fn from_cycle_index(index: i64) -> Self {
        let i = index.rem_euclid(60);
        Self {
            stem: Stem::from_index(i),
            branch: Branch::from_index(i),
        }
    }

    /// Position in the 60-term cycle, if this stem-branch pair occurs in it.
    ///
    /// Only pairs whose stem and branch indices share parity occur (甲丑
    /// never does).
    pub fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        if (s - b).rem_euclid(2) != 0 {
            return None;
        }
        // i ≡ s (mod 10) and i ≡ b (mod 12): step through the 6 candidates.
        (0..6)
            .map(|k| s + 10 * k)
            .find(|i| i % 12 == b)
            .map(|i| i as u8)
    }
}

impl Display for Pillar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.stem, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn glyphs() {
        let stems: String = ALL_STEMS.iter().map(|s| s.glyph()).collect();
        let branches: String = ALL_BRANCHES.iter().map(|b| b.glyph()).collect();
        assert_eq!(stems, "甲乙丙丁戊己庚辛壬癸");
        assert_eq!(branches, "子丑寅卯辰巳午未申酉戌亥");
    }

    #[test]
    fn from_index_wraps_negative() {
        assert_eq!(Stem::from_index(-1), Stem::Gui);
        assert_eq!(Stem::from_index(10), Stem::Jia);
        assert_eq!(Branch::from_index(-1), Branch::Hai);
        assert_eq!(Branch::from_index(-14), Branch::Xu);
    }

    #[test]
    fn pillar_display() {
        let p = Pillar::new(Stem::Jia, Branch::Zi);
        assert_eq!(p.to_string(), "甲 子");
    }

    #[test]
    fn cycle_endpoints() {
        assert_eq!(Pillar::from_cycle_index(0).to_string(), "甲 子");
        assert_eq!(Pillar::from_cycle_index(59).to_string(), "癸 亥");
        assert_eq!(Pillar::from_cycle_index(60), Pillar::from_cycle_index(0));
        assert_eq!(Pillar::from_cycle_index(-1), Pillar::from_cycle_index(59));
    }

    #[test]
    fn cycle_index_inverts_from_cycle_index() {
        for i in 0..60 {
            assert_eq!(Pillar::from_cycle_index(i).cycle_index(), Some(i as u8));
        }
    }

    #[test]
    fn mixed_parity_pair_is_not_in_cycle() {
        assert_eq!(Pillar::new(Stem::Jia, Branch::Chou).cycle_index(), None);
    }

    #[test]
    fn cycle_has_sixty_distinct_pillars() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..60 {
            assert!(seen.insert(Pillar::from_cycle_index(i)));
        }
        assert_eq!(seen.len(), 60);
    }
}
