use super::matching::resolve;

/// 여러 서비스를 묶어 한 가격에 제공하는 결합 상품.
#[derive(Debug)]
pub struct BundleDeal {
    pub name: &'static str,
    /// 월 요금 [원]
    pub price: i64,
    pub included_services: &'static [&'static str],
    pub provider: &'static str,
}

pub fn bundle_deals() -> &'static [BundleDeal] {
    BUNDLES
}

pub fn find_bundle(name: &str) -> Option<&'static BundleDeal> {
    resolve(BUNDLES, |b| b.name, name)
}

const BUNDLES: &[BundleDeal] = &[
    BundleDeal {
        name: "네이버플러스 멤버십 + 티빙",
        price: 4_900,
        included_services: &["네이버플러스 멤버십", "티빙"],
        provider: "네이버",
    },
    BundleDeal {
        name: "쿠팡 와우 멤버십",
        price: 7_890,
        included_services: &["쿠팡 와우", "쿠팡플레이"],
        provider: "쿠팡",
    },
    BundleDeal {
        name: "유튜브 프리미엄 (뮤직 포함)",
        price: 14_900,
        included_services: &["유튜브 프리미엄", "유튜브 뮤직"],
        provider: "구글",
    },
    BundleDeal {
        name: "우주패스 유튜브",
        price: 14_900,
        included_services: &["유튜브 프리미엄", "구글 원"],
        provider: "SKT",
    },
    BundleDeal {
        name: "애플 원 개인",
        price: 14_900,
        included_services: &["애플뮤직", "애플 TV+", "아이클라우드+", "애플 아케이드"],
        provider: "애플",
    },
    BundleDeal {
        name: "티빙·웨이브 더블 이용권",
        price: 16_000,
        included_services: &["티빙", "웨이브"],
        provider: "티빙",
    },
    BundleDeal {
        name: "지니 티빙 결합",
        price: 13_500,
        included_services: &["지니뮤직", "티빙"],
        provider: "KT",
    },
];
