//! 자유 입력된 서비스 이름을 정적 테이블 키와 맞춰 보는 공용 매칭 규칙.
//!
//! 모든 계산기(벤치마크, 공유, 번들, 할인)가 이 모듈만 사용해야 화면마다
//! 매칭 결과가 달라지지 않는다.

use tracing::debug;

/// 어떤 단계에서 매칭됐는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// 키와 완전히 같음
    Exact,
    /// 한쪽이 다른 쪽을 포함
    Substring,
    /// 공백 제거, "+"→"플러스", 소문자화 후 같음
    Normalized,
}

/// 비교용 정규형. 공백을 지우고 "+"를 "플러스"로 바꾼 뒤 소문자로 만든다.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace('+', "플러스")
        .to_lowercase()
}

/// 두 이름이 같은 서비스를 가리키는지 3단계 규칙으로 판정한다.
pub fn match_names(a: &str, b: &str) -> Option<MatchTier> {
    let a = a.trim();
    let b = b.trim();
    if a.is_empty() || b.is_empty() {
        return None;
    }
    if a == b {
        Some(MatchTier::Exact)
    } else if a.contains(b) || b.contains(a) {
        Some(MatchTier::Substring)
    } else if normalize(a) == normalize(b) {
        Some(MatchTier::Normalized)
    } else {
        None
    }
}

pub fn names_match(a: &str, b: &str) -> bool {
    match_names(a, b).is_some()
}

/// 테이블에서 `query`에 해당하는 항목을 찾는다.
///
/// 1) 정확히 일치하는 키 2) 양방향 부분 문자열 (테이블 순서상 첫 항목)
/// 3) 정규형 일치 순으로 시도한다. 어느 단계에도 없으면 `None`.
pub fn resolve<'a, T>(entries: &'a [T], key: impl Fn(&T) -> &str, query: &str) -> Option<&'a T> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    if let Some(entry) = entries.iter().find(|e| key(*e) == query) {
        return Some(entry);
    }
    if let Some(entry) = entries.iter().find(|e| {
        let k = key(*e);
        k.contains(query) || query.contains(k)
    }) {
        debug!(query, matched = key(entry), "부분 문자열로 매칭");
        return Some(entry);
    }
    let normalized = normalize(query);
    let found = entries.iter().find(|e| normalize(key(*e)) == normalized);
    if let Some(entry) = found {
        debug!(query, matched = key(entry), "정규형으로 매칭");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &["넷플릭스", "디즈니+", "유튜브 프리미엄", "유튜브 뮤직"];

    fn find(q: &str) -> Option<&'static str> {
        resolve(KEYS, |k| *k, q).copied()
    }

    #[test]
    fn exact_wins_over_substring() {
        assert_eq!(find("유튜브 뮤직"), Some("유튜브 뮤직"));
    }

    #[test]
    fn substring_either_direction() {
        assert_eq!(find("넷플릭스 프리미엄"), Some("넷플릭스"));
        assert_eq!(find("넷플"), Some("넷플릭스"));
        // 테이블 순서상 첫 항목
        assert_eq!(find("유튜브"), Some("유튜브 프리미엄"));
    }

    #[test]
    fn normalized_plus_and_spaces() {
        assert_eq!(find("디즈니 플러스"), Some("디즈니+"));
        assert_eq!(match_names("Apple TV+", "appletv플러스"), Some(MatchTier::Normalized));
    }

    #[test]
    fn blank_query_matches_nothing() {
        assert_eq!(find("   "), None);
        assert_eq!(find("왓챠"), None);
        assert!(!names_match("", "넷플릭스"));
    }
}
