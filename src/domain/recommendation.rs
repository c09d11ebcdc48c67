//! Style code → recommended sectors.

use crate::domain::sector::{self, SectorTraits};
use crate::domain::style::{Letter, StyleCode};

/// Recommended sectors for `code`, most suitable first.
pub fn sectors_for(code: StyleCode) -> &'static [&'static str] {
    use Letter::*;
    match code.letters() {
        [I, N, T, J] => &["전기전자", "의료·정밀기기", "기계·장비"],
        [I, N, T, P] => &["전기전자", "제약", "화학"],
        [E, N, T, J] => &["증권", "전기전자", "운송장비·부품"],
        [E, N, T, P] => &["제약", "증권", "의료·정밀기기"],
        [I, N, F, J] => &["제약", "의료·정밀기기", "일반서비스"],
        [I, N, F, P] => &["일반서비스", "섬유·의류", "제약"],
        [E, N, F, J] => &["일반서비스", "통신", "유통"],
        [E, N, F, P] => &["일반서비스", "섬유·의류", "증권"],
        [I, S, T, J] => &["금융", "전기·가스", "보험"],
        [I, S, F, J] => &["보험", "통신", "유통"],
        [E, S, T, J] => &["금융", "건설", "운송·창고"],
        [E, S, F, J] => &["유통", "통신", "일반서비스"],
        [I, S, T, P] => &["기계·장비", "금속", "화학"],
        [I, S, F, P] => &["섬유·의류", "종이·목재", "비금속"],
        [E, S, T, P] => &["증권", "건설", "운송장비·부품"],
        [E, S, F, P] => &["유통", "섬유·의류", "운송·창고"],
        _ => &[],
    }
}

/// Like [`sectors_for`] but from code text; unrecognized text yields an empty list.
pub fn sectors_for_code(code: &str) -> &'static [&'static str] {
    code.parse::<StyleCode>()
        .map(sectors_for)
        .unwrap_or(&[])
}

pub fn traits_for(sector_name: &str) -> Option<SectorTraits> {
    sector::traits_for(sector_name)
}

/// Component-wise mean of the known sectors' trait vectors. Unknown names are
/// skipped; `None` when none are known.
pub fn average_traits(sectors: &[&str]) -> Option<SectorTraits> {
    let known: Vec<[f64; 8]> = sectors
        .iter()
        .filter_map(|name| traits_for(name))
        .map(|t| t.to_array())
        .collect();
    if known.is_empty() {
        return None;
    }
    let n = known.len() as f64;
    let mut sums = [0.0_f64; 8];
    for v in &known {
        for (sum, x) in sums.iter_mut().zip(v) {
            *sum += x;
        }
    }
    Some(SectorTraits::from_array(sums.map(|s| s / n)))
}
