use serde::{Deserialize, Serialize};

/// 혼합 가격 계산 입력.
#[derive(Debug, Clone)]
pub struct BlendInput {
    /// 크레딧 차감 후 SAF 가격 [USD/gal]
    pub saf_price_per_gal: f64,
    /// 화석 제트연료 가격 [USD/gal]
    pub fossil_price_per_gal: f64,
    /// SAF 혼합률 [%], 0~100
    pub blend_percent: f64,
}

/// 혼합 가격 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendResult {
    /// [USD/gal]
    pub blended_price_per_gal: f64,
    /// 화석연료 대비 할증률 [%]
    pub premium_percent: f64,
}

/// SAF와 화석 제트연료의 혼합 가격 및 할증률을 계산한다.
pub fn blend_price(input: BlendInput) -> BlendResult {
    let fraction = input.blend_percent.clamp(0.0, 100.0) / 100.0;
    // 0%/100%에서 정확히 끝값이 나오도록 항을 분리해 더한다
    let blended_price_per_gal = if fraction <= 0.0 {
        input.fossil_price_per_gal
    } else if fraction >= 1.0 {
        input.saf_price_per_gal
    } else {
        fraction * input.saf_price_per_gal + (1.0 - fraction) * input.fossil_price_per_gal
    };
    let premium_percent = if input.fossil_price_per_gal > 0.0 {
        (blended_price_per_gal - input.fossil_price_per_gal) / input.fossil_price_per_gal * 100.0
    } else {
        0.0
    };
    BlendResult {
        blended_price_per_gal,
        premium_percent,
    }
}
