//! The 40-question style questionnaire and answer classification.
//!
//! Each question leans toward one letter (its polarity). Answering "yes"
//! credits that letter, answering "no" credits the opposite letter on the same
//! axis. Presentation order never affects the result: [`Questionnaire::shuffled`]
//! only reorders references.

use crate::domain::style::{Axis, Letter, StyleCode, Tally};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

pub type QuestionId = u16;

/// Answers keyed by question id; `true` means "yes".
pub type Answers = HashMap<QuestionId, bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub text: &'static str,
    pub axis: Axis,
    pub polarity: Letter,
}

const fn q(id: QuestionId, polarity: Letter, text: &'static str) -> QuestionRecord {
    QuestionRecord {
        id,
        text,
        axis: polarity.axis(),
        polarity,
    }
}

pub static QUESTIONS: [QuestionRecord; 40] = [
    q(1, Letter::E, "투자 이야기를 친구들과 나누는 것이 즐겁다."),
    q(2, Letter::I, "투자 결정은 혼자 조용히 고민해서 내리는 편이다."),
    q(3, Letter::E, "주식 커뮤니티나 단톡방에서 정보를 자주 얻는다."),
    q(4, Letter::I, "남들의 추천보다 내가 직접 찾은 정보를 더 믿는다."),
    q(5, Letter::E, "투자 세미나나 모임에 참석하는 것을 좋아한다."),
    q(6, Letter::I, "내 포트폴리오는 다른 사람에게 잘 공개하지 않는다."),
    q(7, Letter::E, "수익이 나면 주변에 자랑하고 싶어진다."),
    q(8, Letter::I, "뉴스보다 기업 보고서를 혼자 읽는 시간이 더 편하다."),
    q(9, Letter::E, "유명 투자자의 방송이나 영상을 즐겨 본다."),
    q(10, Letter::I, "시장이 시끄러울수록 잠시 거리를 두고 생각한다."),
    q(11, Letter::N, "아직 돈을 벌지 못해도 미래가 밝은 기업에 끌린다."),
    q(12, Letter::S, "실적과 재무제표 숫자가 확인된 기업이 마음 편하다."),
    q(13, Letter::N, "새로운 기술 트렌드를 보면 관련 종목부터 떠올린다."),
    q(14, Letter::S, "오래 검증된 사업 모델을 가진 회사를 선호한다."),
    q(15, Letter::N, "10년 뒤 세상이 어떻게 바뀔지 상상하며 투자한다."),
    q(16, Letter::S, "차트와 과거 데이터를 꼼꼼히 확인하는 편이다."),
    q(17, Letter::N, "직감이 강하게 오면 근거가 부족해도 관심이 간다."),
    q(18, Letter::S, "배당처럼 눈에 보이는 수익이 중요하다."),
    q(19, Letter::N, "신산업 이야기를 들으면 가슴이 뛴다."),
    q(20, Letter::S, "잘 아는 업종에만 투자하는 것이 원칙이다."),
    q(21, Letter::T, "손실이 나도 원칙대로 손절할 수 있다."),
    q(22, Letter::F, "내가 좋아하는 브랜드의 회사에 투자하고 싶다."),
    q(23, Letter::T, "감정보다 숫자로 판단하는 것이 맞다고 생각한다."),
    q(24, Letter::F, "사회적 가치를 지키는 기업에 더 마음이 간다."),
    q(25, Letter::T, "종목을 고를 때 비교표를 만들어 본다."),
    q(26, Letter::F, "오래 들고 있던 종목은 정이 들어 팔기 어렵다."),
    q(27, Letter::T, "남들이 뭐라 해도 계산이 맞으면 투자한다."),
    q(28, Letter::F, "가족이나 친구가 일하는 회사라면 믿음이 간다."),
    q(29, Letter::T, "수익률과 위험을 수치로 따져 보는 것이 즐겁다."),
    q(30, Letter::F, "시장 분위기가 나쁘면 나도 덩달아 불안해진다."),
    q(31, Letter::J, "매수 전에 목표 가격과 기간을 정해 둔다."),
    q(32, Letter::P, "좋은 기회가 보이면 계획에 없어도 바로 산다."),
    q(33, Letter::J, "매달 정해진 날에 꾸준히 적립식으로 투자한다."),
    q(34, Letter::P, "시장 상황에 따라 전략을 자주 바꾸는 편이다."),
    q(35, Letter::J, "투자 일지를 쓰거나 매매 기록을 남긴다."),
    q(36, Letter::P, "일단 조금 사 보고 나중에 생각한다."),
    q(37, Letter::J, "포트폴리오 비중을 정해 두고 주기적으로 맞춘다."),
    q(38, Letter::P, "단기 매매의 짜릿함을 즐긴다."),
    q(39, Letter::J, "계획하지 않은 매매를 하면 마음이 불편하다."),
    q(40, Letter::P, "여러 종목을 이것저것 시도해 보는 것이 재미있다."),
];

#[derive(Debug, Clone)]
pub struct Questionnaire {
    questions: Vec<QuestionRecord>,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::standard()
    }
}

impl Questionnaire {
    pub fn standard() -> Self {
        Self::new(QUESTIONS.to_vec())
    }

    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&QuestionRecord> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Questions in a random presentation order.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&QuestionRecord> {
        let mut order: Vec<&QuestionRecord> = self.questions.iter().collect();
        order.shuffle(rng);
        order
    }

    /// Letter counts for `answers`. Ids not in the questionnaire are ignored.
    pub fn tally(&self, answers: &Answers) -> Tally {
        let mut tally = Tally::default();
        for (&id, &yes) in answers {
            match self.get(id) {
                Some(question) => {
                    let letter = if yes {
                        question.polarity
                    } else {
                        question.polarity.opposite()
                    };
                    tally.credit(letter);
                }
                None => tracing::debug!(id, "ignoring answer to unknown question"),
            }
        }
        tally
    }

    pub fn classify(&self, answers: &Answers) -> StyleCode {
        self.tally(answers).code()
    }
}

/// Classifies answers against the standard questionnaire. Axis ties resolve
/// to I, N, T and J.
pub fn classify(answers: &Answers) -> StyleCode {
    Questionnaire::standard().classify(answers)
}

/// Accepts yes tokens (`y`, `yes`, `1`, `true`, `o`, `그렇다`, `예`) and no tokens
/// (`n`, `no`, `0`, `false`, `x`, `아니다`, `아니오`), case-insensitively.
pub fn parse_answer(token: &str) -> Option<bool> {
    match token.trim().to_lowercase().as_str() {
        "y" | "yes" | "1" | "true" | "o" | "그렇다" | "예" => Some(true),
        "n" | "no" | "0" | "false" | "x" | "아니다" | "아니오" => Some(false),
        _ => None,
    }
}
