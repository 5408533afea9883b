/// 하루 구독료를 체감시키기 위한 일상 물가 [원].
#[derive(Debug)]
pub struct DailyItem {
    pub name: &'static str,
    pub price: i64,
}

pub fn daily_items() -> &'static [DailyItem] {
    DAILY_ITEMS
}

// 가격이 같은 항목이 있으면 먼저 나온 쪽이 비교 대상이 된다.
const DAILY_ITEMS: &[DailyItem] = &[
    DailyItem { name: "사탕 한 알", price: 100 },
    DailyItem { name: "생수 한 병", price: 500 },
    DailyItem { name: "삼각김밥", price: 1_200 },
    DailyItem { name: "버스 한 번", price: 1_500 },
    DailyItem { name: "편의점 커피", price: 2_000 },
    DailyItem { name: "김밥 한 줄", price: 3_500 },
    DailyItem { name: "아메리카노", price: 4_500 },
    DailyItem { name: "국밥 한 그릇", price: 9_000 },
    DailyItem { name: "영화 한 편", price: 15_000 },
    DailyItem { name: "치킨 한 마리", price: 20_000 },
];
