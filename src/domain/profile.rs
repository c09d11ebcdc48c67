//! Descriptions of the 16 investment styles.

use crate::domain::style::StyleCode;

#[derive(Debug, Clone, Copy)]
pub struct TypeProfile {
    pub code: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
}

pub static PROFILES: [TypeProfile; 16] = [
    TypeProfile {
        code: "INTJ",
        description: "장기 전략을 세우고 흔들림 없이 실행하는 설계자형 투자자",
        strengths: &["체계적인 장기 계획", "독립적인 분석력"],
        weaknesses: &["자기 판단에 대한 과신", "시장 변화에 늦은 대응"],
    },
    TypeProfile {
        code: "INTP",
        description: "원리를 파고들어 숨은 가치를 찾는 분석가형 투자자",
        strengths: &["깊이 있는 기업 분석", "새로운 아이디어 탐구"],
        weaknesses: &["분석에 치우친 실행 지연", "기회를 놓치는 우유부단함"],
    },
    TypeProfile {
        code: "ENTJ",
        description: "목표를 정하면 과감하게 밀어붙이는 지휘관형 투자자",
        strengths: &["빠른 의사결정", "명확한 수익 목표"],
        weaknesses: &["공격적인 비중 확대", "위험 신호 경시"],
    },
    TypeProfile {
        code: "ENTP",
        description: "새로운 기회를 누구보다 먼저 시도하는 발명가형 투자자",
        strengths: &["트렌드 포착 능력", "유연한 전략 전환"],
        weaknesses: &["잦은 매매", "한 종목에 대한 인내 부족"],
    },
    TypeProfile {
        code: "INFJ",
        description: "가치와 의미를 중시하며 멀리 내다보는 옹호자형 투자자",
        strengths: &["확고한 투자 철학", "장기 보유 인내심"],
        weaknesses: &["이상에 치우친 종목 선택", "손절 시점 놓침"],
    },
    TypeProfile {
        code: "INFP",
        description: "자신이 믿는 가치에 투자하는 중재자형 투자자",
        strengths: &["신념 있는 장기 투자", "유행에 휩쓸리지 않음"],
        weaknesses: &["수치 분석 소홀", "감정적 보유"],
    },
    TypeProfile {
        code: "ENFJ",
        description: "사람과 사회의 변화를 읽는 선도자형 투자자",
        strengths: &["소비 트렌드 감각", "정보 네트워크 활용"],
        weaknesses: &["주변 의견에 대한 의존", "과도한 낙관"],
    },
    TypeProfile {
        code: "ENFP",
        description: "호기심과 열정으로 다양한 기회를 찾는 활동가형 투자자",
        strengths: &["새로운 산업 발굴", "긍정적인 회복력"],
        weaknesses: &["계획 없는 분산", "충동적인 매수"],
    },
    TypeProfile {
        code: "ISTJ",
        description: "검증된 원칙을 꾸준히 지키는 관리자형 투자자",
        strengths: &["철저한 원칙 준수", "안정적인 수익 관리"],
        weaknesses: &["새로운 기회에 대한 보수성", "변화 적응 지연"],
    },
    TypeProfile {
        code: "ISFJ",
        description: "자산을 지키는 것을 최우선으로 하는 수호자형 투자자",
        strengths: &["신중한 위험 관리", "꾸준한 적립 투자"],
        weaknesses: &["지나친 안전 추구", "낮은 기대 수익"],
    },
    TypeProfile {
        code: "ESTJ",
        description: "실적과 숫자로 판단하는 경영자형 투자자",
        strengths: &["명확한 기준", "효율적인 포트폴리오 운영"],
        weaknesses: &["경직된 판단", "질적 요인 경시"],
    },
    TypeProfile {
        code: "ESFJ",
        description: "익숙하고 친근한 기업을 선호하는 친선도모형 투자자",
        strengths: &["생활 밀착형 종목 발굴", "안정적인 배당 선호"],
        weaknesses: &["평판에 좌우되는 판단", "분석 부족"],
    },
    TypeProfile {
        code: "ISTP",
        description: "상황을 냉정하게 분석하고 실용적으로 움직이는 장인형 투자자",
        strengths: &["위기 상황의 침착함", "효율적인 매매"],
        weaknesses: &["장기 계획 부족", "흥미 위주의 종목 선택"],
    },
    TypeProfile {
        code: "ISFP",
        description: "자신만의 속도로 편안하게 투자하는 모험가형 투자자",
        strengths: &["유연한 태도", "무리하지 않는 투자"],
        weaknesses: &["체계적인 관리 부족", "결정 미루기"],
    },
    TypeProfile {
        code: "ESTP",
        description: "시장의 흐름을 빠르게 타는 사업가형 투자자",
        strengths: &["빠른 실행력", "단기 기회 포착"],
        weaknesses: &["위험 관리 소홀", "잦은 매매 비용"],
    },
    TypeProfile {
        code: "ESFP",
        description: "즐겁게 투자하며 분위기를 읽는 연예인형 투자자",
        strengths: &["시장 분위기 감지", "낙천적인 태도"],
        weaknesses: &["충동 매매", "손실 관리 미흡"],
    },
];

pub fn profile_for(code: StyleCode) -> Option<&'static TypeProfile> {
    let text = code.to_string();
    PROFILES.iter().find(|p| p.code == text)
}
