use serde::{Deserialize, Serialize};

/// 표시 통화. 내부 계산은 모두 USD로 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Krw,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Krw,
    ];

    /// 1 USD당 해당 통화 단위의 기본 환율.
    pub fn default_fx_rate(&self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Eur => 0.92,
            Currency::Gbp => 0.79,
            Currency::Jpy => 150.0,
            Currency::Krw => 1350.0,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Krw => "KRW",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Krw => "₩",
        }
    }
}

/// USD 금액을 표시 통화로 환산한다.
pub fn convert_from_usd(usd: f64, fx_rate: f64) -> f64 {
    usd * fx_rate
}

/// 표시 통화 금액을 USD로 환산한다.
pub fn convert_to_usd(amount: f64, fx_rate: f64) -> f64 {
    amount / fx_rate
}
