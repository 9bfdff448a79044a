//! Bundled product data.
//!
//! Metrics are kept in the unit-suffixed form they are published in; see
//! [`super::parse`] for normalization.

/// One bundled record before normalization.
pub(super) struct BundledRecord {
    /// Image reference.
    pub image: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Energy text, e.g. `"180kcal"`.
    pub kcal: &'static str,
    /// Sugar text, e.g. `"12g"`.
    pub sugar: &'static str,
    /// Manufacturer label.
    pub company: &'static str,
}

/// Shorthand constructor keeping the table below readable.
const fn rec(
    image: &'static str,
    title: &'static str,
    kcal: &'static str,
    sugar: &'static str,
    company: &'static str,
) -> BundledRecord {
    BundledRecord {
        image,
        title,
        kcal,
        sugar,
        company,
    }
}

/// The bundled catalog, in display order.
pub(super) const BUNDLED: &[BundledRecord] = &[
    rec("images/haitai/bravo-cone.webp", "부라보콘 바닐라", "185kcal", "15g", "해태"),
    rec("images/haitai/nugabar.webp", "누가바", "150kcal", "13g", "해태"),
    rec("images/haitai/babamba.webp", "바밤바", "125kcal", "14g", "해태"),
    rec("images/haitai/hodumaru.webp", "호두마루 홈", "170kcal", "16g", "해태"),
    rec("images/haitai/ssangssangbar.webp", "쌍쌍바", "140kcal", "14g", "해태"),
    rec("images/haitai/cherrymaru.webp", "체리마루", "160kcal", "17g", "해태"),
    rec("images/lalasweet/vanilla-pint.webp", "라라스윗 바닐라 파인트", "360kcal", "6g", "라라스윗"),
    rec("images/lalasweet/choco-pint.webp", "라라스윗 초코 파인트", "380kcal", "7g", "라라스윗"),
    rec("images/lalasweet/matcha-bar.webp", "라라스윗 말차 바", "70kcal", "2.5g", "라라스윗"),
    rec("images/lalasweet/choco-bar.webp", "라라스윗 초코 바", "75kcal", "3g", "라라스윗"),
    rec("images/lalasweet/milk-monaka.webp", "라라스윗 밀크 모나카", "90kcal", "4g", "라라스윗"),
    rec("images/lotte/worldcone.webp", "월드콘 바닐라", "260kcal", "22g", "롯데"),
    rec("images/lotte/screwbar.webp", "스크류바", "95kcal", "17g", "롯데"),
    rec("images/lotte/jawsbar.webp", "죠스바", "90kcal", "16g", "롯데"),
    rec("images/lotte/watermelonbar.webp", "수박바", "100kcal", "18g", "롯데"),
    rec("images/lotte/pigbar.webp", "돼지바", "190kcal", "16g", "롯데"),
    rec("images/lotte/seolleim.webp", "설레임 밀크", "160kcal", "20g", "롯데"),
    rec("images/lotte/ppapiko.webp", "빠삐코", "150kcal", "19g", "롯데"),
    rec("images/lotte/chaltteok.webp", "찰떡아이스", "220kcal", "18g", "롯데"),
    rec("images/binggrae/melona.webp", "메로나", "95kcal", "14g", "빙그레"),
    rec("images/binggrae/together.webp", "투게더 바닐라", "245kcal", "21g", "빙그레"),
    rec("images/binggrae/samanco.webp", "붕어싸만코", "270kcal", "18g", "빙그레"),
    rec("images/binggrae/ppangpare.webp", "빵빠레", "230kcal", "17g", "빙그레"),
    rec("images/binggrae/bibibig.webp", "비비빅", "135kcal", "17g", "빙그레"),
    rec("images/binggrae/duwi.webp", "더위사냥", "130kcal", "16g", "빙그레"),
    rec("images/binggrae/excellent.webp", "엑설런트", "250kcal", "19g", "빙그레"),
    rec("images/binggrae/supercone.webp", "슈퍼콘 바닐라", "240kcal", "20g", "빙그레"),
    rec("images/haagendazs/vanilla.webp", "하겐다즈 바닐라 미니컵", "250kcal", "20g", "하겐다즈"),
    rec("images/haagendazs/strawberry.webp", "하겐다즈 스트로베리 미니컵", "230kcal", "20g", "하겐다즈"),
    rec("images/haagendazs/greentea.webp", "하겐다즈 그린티 미니컵", "240kcal", "19g", "하겐다즈"),
    rec("images/haagendazs/cookies-cream.webp", "하겐다즈 쿠키앤크림 미니컵", "270kcal", "21g", "하겐다즈"),
    rec("images/haagendazs/macadamia.webp", "하겐다즈 마카다미아 넛 미니컵", "290kcal", "19.5g", "하겐다즈"),
    rec("images/haagendazs/crispy-sandwich.webp", "하겐다즈 크리스피 샌드위치 바닐라", "245kcal", "17.5g", "하겐다즈"),
];
