use std::collections::VecDeque;

use serde::Serialize;

use crate::format;
use crate::quantity::{Category, Unit};

/// 보관하는 최근 변환 기록의 최대 개수.
pub const HISTORY_LIMIT: usize = 10;

/// 성공한 변환 한 건. 생성 후에는 바뀌지 않는다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRecord {
    magnitude: f64,
    from_unit: String,
    result: f64,
    to_unit: String,
    category: Category,
}

impl ConversionRecord {
    pub fn new(
        magnitude: f64,
        from_unit: &str,
        result: f64,
        to_unit: &str,
        category: Category,
    ) -> Self {
        Self {
            magnitude,
            from_unit: from_unit.to_string(),
            result,
            to_unit: to_unit.to_string(),
            category,
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// 기록 당시 분류에서 단위 이름을 찾는다. 없는 단위는 식별자를 그대로 쓴다.
    fn unit_name<'a>(&self, id: &'a str) -> &'a str {
        Unit::parse(self.category, id)
            .map(Unit::short_label)
            .unwrap_or(id)
    }
}

impl std::fmt::Display for ConversionRecord {
    /// `1 Mile = 1609.3440 Meter`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} = {} {}",
            format::format_magnitude(self.magnitude),
            self.unit_name(&self.from_unit),
            format::format_history_result(self.result),
            self.unit_name(&self.to_unit)
        )
    }
}

/// 최신 항목이 앞에 오는 고정 길이 변환 기록.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: VecDeque<ConversionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 기록을 맨 앞에 넣고, 한도를 넘은 오래된 기록을 버린다.
    pub fn push(&mut self, record: ConversionRecord) {
        self.entries.push_front(record);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> impl Iterator<Item = &ConversionRecord> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&ConversionRecord> {
        self.entries.front()
    }

    /// 화면 표시용 문자열 목록(최신순).
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
